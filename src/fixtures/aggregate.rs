//! Folds feed matches into records, the referee roster and matchweek date spans.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::debug;

use crate::error::FixtureError;
use crate::fixtures::teams::canonical_team_name;
use crate::fixtures::types::{Match, MatchRecord};

/// Referee shown for matches whose feed entry lists none.
pub const UNKNOWN_REFEREE: &str = "Unknown";

/// First and last kickoff date of a matchweek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchweekSpan {
    pub starts: NaiveDate,
    pub ends: NaiveDate,
}

impl MatchweekSpan {
    fn extend(&mut self, date: NaiveDate) {
        self.starts = self.starts.min(date);
        self.ends = self.ends.max(date);
    }
}

/// Every match of a feed plus the aggregates built while folding them.
#[derive(Debug, Default)]
pub struct FixtureSet {
    pub matches: Vec<MatchRecord>,
    /// Distinct referees in order of first appearance, never `Unknown`.
    pub referees: Vec<String>,
    pub matchweeks: BTreeMap<u32, MatchweekSpan>,
}

impl FixtureSet {
    fn add_referee(&mut self, name: &str) {
        if name == UNKNOWN_REFEREE || self.referees.iter().any(|r| r == name) {
            return;
        }
        debug!(referee = name, "Added referee");
        self.referees.push(name.to_string());
    }

    fn add_matchweek_date(&mut self, matchweek: u32, date: NaiveDate) {
        self.matchweeks
            .entry(matchweek)
            .and_modify(|span| span.extend(date))
            .or_insert(MatchweekSpan {
                starts: date,
                ends: date,
            });
    }

    fn push(&mut self, record: MatchRecord) {
        self.add_referee(&record.referee);
        self.add_matchweek_date(record.matchweek, record.date);
        self.matches.push(record);
    }

    /// Years that have at least one match, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.matches.iter().map(|m| m.date.year()).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

/// Parses a feed kickoff timestamp (RFC 3339) into UTC.
pub fn kickoff_utc(utc_date: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(utc_date).map(|dt| dt.with_timezone(&Utc))
}

/// Derives the record for the `index`-th match of a feed.
pub fn to_record(index: usize, m: &Match) -> Result<MatchRecord, FixtureError> {
    let kickoff = kickoff_utc(&m.utc_date).map_err(|source| FixtureError::InvalidKickoff {
        index,
        value: m.utc_date.clone(),
        source,
    })?;

    let referee = m
        .referees
        .first()
        .map_or(UNKNOWN_REFEREE, |r| r.name.as_str());

    Ok(MatchRecord {
        date: kickoff.date_naive(),
        home_team: canonical_team_name(&m.home_team.short_name).to_string(),
        away_team: canonical_team_name(&m.away_team.short_name).to_string(),
        kickoff: m.utc_date.clone(),
        matchweek: m.matchday,
        half_time: m.score.half_time,
        full_time: m.score.full_time,
        referee: referee.to_string(),
    })
}

/// Folds the feed's matches, in order, into a [`FixtureSet`].
pub fn fold_matches(matches: &[Match]) -> Result<FixtureSet, FixtureError> {
    let mut set = FixtureSet::default();
    for (index, m) in matches.iter().enumerate() {
        set.push(to_record(index, m)?);
    }
    Ok(set)
}
