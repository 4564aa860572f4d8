//! Football fixture feed to match, referee and matchweek notes.
//!
//! The whole feed is folded first; referee and matchweek notes are only
//! rendered from the completed aggregates.

pub mod aggregate;
pub mod note;
pub mod teams;
pub mod types;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::error::FixtureError;
use crate::output::{Note, NoteSink, WriteReport, write_notes};
use aggregate::{FixtureSet, fold_matches};
use note::{match_note, matchweek_note, referee_note};
use types::FixtureFeed;

/// Labels written into every fixture note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureOptions {
    pub competition: String,
    pub season: String,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            competition: "Premier League".to_string(),
            season: "2024-2025".to_string(),
        }
    }
}

/// Parses a fixture feed document and folds its matches.
pub fn parse_feed(json: &str) -> Result<FixtureSet, FixtureError> {
    let feed: FixtureFeed = serde_json::from_str(json)?;
    fold_matches(&feed.matches)
}

/// Renders every note for a folded feed: matches, then referees, then matchweeks.
pub fn render_notes(set: &FixtureSet, options: &FixtureOptions) -> Vec<Note> {
    let matches = set.matches.iter().map(|record| match_note(record, options));
    let referees = set.referees.iter().map(|name| referee_note(name));
    let matchweeks = set
        .matchweeks
        .iter()
        .map(|(matchweek, span)| matchweek_note(*matchweek, span, options));

    matches.chain(referees).chain(matchweeks).collect()
}

/// Converts the fixture feed at `input` and writes its notes through `sink`.
#[tracing::instrument(skip_all, fields(input = %input.display(), competition = %options.competition))]
pub async fn convert_fixtures(
    input: &Path,
    options: &FixtureOptions,
    sink: Arc<dyn NoteSink>,
) -> Result<WriteReport> {
    info!("Reading fixture feed");
    let json = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("reading {}", input.display()))?;

    let set = parse_feed(&json).with_context(|| format!("parsing {}", input.display()))?;
    info!(
        matches = set.matches.len(),
        referees = set.referees.len(),
        matchweeks = set.matchweeks.len(),
        years = ?set.years(),
        "Folded fixture feed"
    );

    let report = write_notes(sink, render_notes(&set, options)).await.into_result()?;
    info!(
        "Wrote {} matches, {} referees, and {} match weeks.",
        set.matches.len(),
        set.referees.len(),
        set.matchweeks.len()
    );
    Ok(report)
}
