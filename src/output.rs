//! Note persistence.
//!
//! Recipes render every note into memory first, then hand the whole batch
//! to [`write_notes`], which writes them concurrently through a
//! [`NoteSink`] and only returns once every write has finished.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// A single rendered Markdown file.
///
/// `path` is relative to the sink's root, e.g. `2024/2024-08-16 - ... .md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub path: PathBuf,
    pub contents: String,
}

impl Note {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Makes `name` usable as a single path component by replacing separators.
///
/// Names come from input data; a `/` in a referee name must not open a
/// subdirectory below the sink root.
pub fn file_component(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}

/// Destination for rendered notes.
#[async_trait]
pub trait NoteSink: Send + Sync {
    async fn write(&self, note: &Note) -> Result<PathBuf>;
}

/// Writes notes below a root directory, creating parent directories as needed.
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl NoteSink for DirSink {
    async fn write(&self, note: &Note) -> Result<PathBuf> {
        let target = self.root.join(&note.path);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        tokio::fs::write(&target, note.contents.as_bytes())
            .await
            .with_context(|| format!("writing {}", target.display()))?;
        Ok(target)
    }
}

/// A note that could not be written.
#[derive(Debug)]
pub struct FailedWrite {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a joined write batch.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: usize,
    pub failed: Vec<FailedWrite>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turns a report with failures into an error summarising them.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let first = &self.failed[0];
        anyhow::bail!(
            "{} of {} notes failed to write (first: {}: {})",
            self.failed.len(),
            self.failed.len() + self.written,
            first.path.display(),
            first.error
        )
    }
}

/// Collapses notes that share a path, keeping the last one in batch order.
fn dedup_by_path(notes: Vec<Note>) -> Vec<Note> {
    let mut index: HashMap<PathBuf, usize> = HashMap::new();
    let mut unique: Vec<Note> = Vec::with_capacity(notes.len());

    for note in notes {
        match index.get(&note.path) {
            Some(&slot) => {
                warn!(path = %note.path.display(), "Duplicate note path, keeping the later note");
                unique[slot] = note;
            }
            None => {
                index.insert(note.path.clone(), unique.len());
                unique.push(note);
            }
        }
    }

    unique
}

/// Writes every note through `sink` and waits for all of them.
///
/// A failing write is logged and recorded; it never stops the other writes.
pub async fn write_notes(sink: Arc<dyn NoteSink>, notes: Vec<Note>) -> WriteReport {
    let mut tasks = JoinSet::new();

    for note in dedup_by_path(notes) {
        let sink = Arc::clone(&sink);
        tasks.spawn(async move {
            let outcome = sink.write(&note).await;
            (note.path, outcome)
        });
    }

    let mut report = WriteReport::default();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(target))) => {
                debug!(path = %target.display(), "Wrote note");
                report.written += 1;
            }
            Ok((path, Err(e))) => {
                let message = format!("{e:#}");
                error!(path = %path.display(), error = %message, "Failed to write note");
                report.failed.push(FailedWrite {
                    path,
                    error: message,
                });
            }
            Err(e) => {
                error!(error = %e, "Note write task did not complete");
                report.failed.push(FailedWrite {
                    path: PathBuf::new(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        written = report.written,
        failed = report.failed.len(),
        "Note batch finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct RejectingSink {
        inner: DirSink,
        reject: &'static str,
    }

    #[async_trait]
    impl NoteSink for RejectingSink {
        async fn write(&self, note: &Note) -> Result<PathBuf> {
            if note.path.to_string_lossy().contains(self.reject) {
                anyhow::bail!("disk full");
            }
            self.inner.write(note).await
        }
    }

    #[test]
    fn test_file_component_replaces_separators() {
        assert_eq!(file_component("Anthony Taylor"), "Anthony Taylor");
        assert_eq!(file_component("../../etc/passwd"), "..-..-etc-passwd");
        assert_eq!(file_component(r"Wolves\Reserves"), "Wolves-Reserves");
    }

    #[tokio::test]
    async fn test_dir_sink_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirSink::new(dir.path().join("out"));

        let target = sink
            .write(&Note::new("2024/People/Anthony Taylor.md", "body"))
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(target).unwrap(), "body");
    }

    #[tokio::test]
    async fn test_write_notes_waits_for_every_note() {
        let dir = tempfile::tempdir().unwrap();
        let sink: Arc<dyn NoteSink> = Arc::new(DirSink::new(dir.path()));
        let notes = (1..=40)
            .map(|i| Note::new(format!("n/{i:02}.md"), i.to_string()))
            .collect();

        let report = write_notes(sink, notes).await;

        assert_eq!(report.written, 40);
        assert!(report.is_success());
        assert_eq!(fs::read_dir(dir.path().join("n")).unwrap().count(), 40);
    }

    #[test]
    fn test_dedup_keeps_last_note_for_a_path() {
        let notes = vec![
            Note::new("2024-03-05 - Taekwondo.md", "morning"),
            Note::new("other.md", "x"),
            Note::new("2024-03-05 - Taekwondo.md", "evening"),
        ];

        let unique = dedup_by_path(notes);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].contents, "evening");
        assert_eq!(unique[1].path, PathBuf::from("other.md"));
    }

    #[tokio::test]
    async fn test_failed_write_does_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let sink: Arc<dyn NoteSink> = Arc::new(RejectingSink {
            inner: DirSink::new(dir.path()),
            reject: "bad",
        });
        let notes = vec![
            Note::new("a.md", "a"),
            Note::new("bad.md", "x"),
            Note::new("c.md", "c"),
        ];

        let report = write_notes(sink, notes).await;

        assert_eq!(report.written, 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path, PathBuf::from("bad.md"));
        assert!(dir.path().join("a.md").exists());
        assert!(dir.path().join("c.md").exists());

        let err = report.into_result().unwrap_err();
        assert!(err.to_string().contains("1 of 3 notes failed"));
    }
}
