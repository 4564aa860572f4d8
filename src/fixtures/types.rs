//! Fixture feed wire types and the per-match record derived from them.

use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level fixture document: `{ "matches": [...] }`.
#[derive(Debug, Deserialize)]
pub struct FixtureFeed {
    pub matches: Vec<Match>,
}

/// A single match as it appears in the feed. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub home_team: Team,
    pub away_team: Team,
    pub utc_date: String,
    pub matchday: u32,
    pub score: Score,
    #[serde(default)]
    pub referees: Vec<Referee>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub short_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Referee {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub half_time: ScoreLine,
    pub full_time: ScoreLine,
}

/// Goals per side; `None` for matches not yet played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ScoreLine {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

/// A match after date extraction, team renaming and referee selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Kickoff date in UTC.
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    /// Kickoff timestamp exactly as given in the feed.
    pub kickoff: String,
    pub matchweek: u32,
    pub half_time: ScoreLine,
    pub full_time: ScoreLine,
    pub referee: String,
}
