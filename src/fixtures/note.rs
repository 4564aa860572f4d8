//! Match, referee and matchweek notes.

use chrono::Datelike;

use crate::fixtures::FixtureOptions;
use crate::fixtures::aggregate::{MatchweekSpan, UNKNOWN_REFEREE};
use crate::fixtures::types::{MatchRecord, ScoreLine};
use crate::output::{Note, file_component};

pub const REFEREE_DIR: &str = "People";
pub const MATCHWEEK_DIR: &str = "Fixtures";

const MATCHWEEK_QUERY: &str = "#### Matches
```dataview
TABLE WITHOUT ID
\t\"[[\" + file.name + \"|\" + home-team + \" vs. \" + away-team + \"]]\" AS \"Note\",
\tdateformat(kickoff, \"hh:mm - EEE MMM dd\") AS \"Kickoff\",
\treferee AS \"Referee\"
FROM \"Sports/Fixtures\"
WHERE\x20
\ttype = \"football match\"
\tAND
\tmatchweek = this.matchweek
SORT kickoff ASC
```
";

fn goals(value: Option<u32>) -> String {
    value.map_or_else(|| "null".to_string(), |g| g.to_string())
}

fn score(line: &ScoreLine) -> String {
    format!("{} - {}", goals(line.home), goals(line.away))
}

/// `Matchweek 3 - Premier League 2024-2025`
pub fn matchweek_title(matchweek: u32, options: &FixtureOptions) -> String {
    format!(
        "Matchweek {matchweek} - {} {}",
        options.competition, options.season
    )
}

/// File name of a match note, e.g. `2024-08-16 - Manchester United vs Fulham - Premier League.md`.
pub fn match_file_name(record: &MatchRecord, options: &FixtureOptions) -> String {
    format!(
        "{} - {} vs {} - {}.md",
        record.date.format("%Y-%m-%d"),
        record.home_team,
        record.away_team,
        options.competition
    )
}

/// Match note, filed under its kickoff year.
pub fn match_note(record: &MatchRecord, options: &FixtureOptions) -> Note {
    let title = match_file_name(record, options);
    let matchweek = record.matchweek;
    let referee_link = if record.referee == UNKNOWN_REFEREE {
        record.referee.clone()
    } else {
        format!("[[{}]]", record.referee)
    };

    let contents = format!(
        "---
type: football match
name: {title}
group-key: event
competition: {competition}
season: {season}
kickoff: {kickoff}
home-team: {home}
away-team: {away}
matchweek: {matchweek}
half-time: {half_time}
full-time: {full_time}
referee: {referee}
---
[[{home}]] vs. [[{away}]] played in [[{matchweek_title}|Matchweek {matchweek}]], refereed by {referee_link}.",
        competition = options.competition,
        season = options.season,
        kickoff = record.kickoff,
        home = record.home_team,
        away = record.away_team,
        half_time = score(&record.half_time),
        full_time = score(&record.full_time),
        referee = record.referee,
        matchweek_title = matchweek_title(matchweek, options),
    );

    Note::new(
        format!("{}/{}", record.date.year(), file_component(&title)),
        contents,
    )
}

pub fn referee_note(name: &str) -> Note {
    Note::new(
        format!("{REFEREE_DIR}/{}.md", file_component(name)),
        format!("---\ntype: person\nname: {name}\nprofession: football referee\n---"),
    )
}

pub fn matchweek_note(matchweek: u32, span: &MatchweekSpan, options: &FixtureOptions) -> Note {
    let title = matchweek_title(matchweek, options);
    let contents = format!(
        "---
type: football season
name: {title}
group-key: event
league: {competition}
season: {season}
matchweek: {matchweek}
starts: {starts}
ends: {ends}
---
{MATCHWEEK_QUERY}",
        competition = options.competition,
        season = options.season,
        starts = span.starts.format("%Y-%m-%d"),
        ends = span.ends.format("%Y-%m-%d"),
    );

    Note::new(
        format!("{MATCHWEEK_DIR}/{}.md", file_component(&title)),
        contents,
    )
}
