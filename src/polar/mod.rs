//! Polar Beat fitness exports to Taekwondo session notes.
//!
//! Every regular file in the import directory is parsed as a CSV export,
//! its heart rate series downsampled to one point per 30 seconds, and the
//! result rendered as one note per session.

pub mod downsample;
pub mod note;
pub mod parser;
pub mod types;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::output::{NoteSink, WriteReport, write_notes};
use downsample::into_session;
use note::render_note;
use parser::parse_export;

/// Lists the regular files of `dir`, sorted by name.
async fn list_exports(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("import path \"{}\" is not readable", dir.display()))?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Converts every export in `import_dir` and writes the notes through `sink`.
///
/// All exports are parsed before anything is written, so a malformed file
/// aborts the run without partial output.
#[tracing::instrument(skip_all, fields(import_dir = %import_dir.display()))]
pub async fn convert_polarbeat(import_dir: &Path, sink: Arc<dyn NoteSink>) -> Result<WriteReport> {
    let files = list_exports(import_dir).await?;
    info!(files = files.len(), "Found Polar Beat exports");

    let mut notes = Vec::with_capacity(files.len());
    for path in files {
        let text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;

        let session = parse_export(&text)
            .and_then(into_session)
            .with_context(|| format!("converting {}", path.display()))?;

        debug!(
            file = %path.display(),
            date = %session.date,
            samples = session.samples.len(),
            max_hr = session.max_hr,
            "Parsed session"
        );
        notes.push(render_note(&session));
    }

    write_notes(sink, notes).await.into_result()
}
