//! Error types for the input formats the recipes read.

use thiserror::Error;

/// Failures while reading a Polar Beat fitness CSV export.
///
/// `MissingLine` counts non-blank lines; sample errors carry the file line.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export is missing line {line} ({what})")]
    MissingLine { line: usize, what: &'static str },

    #[error("summary row has {found} columns, expected at least {expected}")]
    ShortSummary { found: usize, expected: usize },

    #[error("sample header has no \"{name}\" column")]
    MissingColumn { name: &'static str },

    #[error("line {line}: invalid elapsed time \"{value}\" (expected HH:MM:SS)")]
    InvalidTimestamp { line: usize, value: String },

    #[error("line {line}: invalid heart rate \"{value}\"")]
    InvalidHeartRate { line: usize, value: String },

    #[error("no heart rate samples fall on a 30 second boundary")]
    NoSamples,

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures while reading a fixture feed.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("malformed fixture feed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("match {index}: invalid kickoff timestamp \"{value}\"")]
    InvalidKickoff {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
