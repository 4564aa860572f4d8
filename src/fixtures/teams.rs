//! Team name normalisation.

/// Short names used by the feed mapped to the names used for team notes.
static TEAM_ALIASES: &[(&str, &str)] = &[
    ("Brighton Hove", "Brighton Hove Albion"),
    ("Man City", "Manchester City"),
    ("Man United", "Manchester United"),
    ("Newcastle", "Newcastle United"),
    ("Nottingham", "Nottingham Forest"),
    ("Tottenham", "Tottenham Hotspur"),
    ("West Ham", "West Ham United"),
    ("Wolverhampton", "Wolverhampton Wanderers"),
];

/// Returns the canonical team name; names without an alias pass through.
pub fn canonical_team_name(name: &str) -> &str {
    TEAM_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |&(_, canonical)| canonical)
}
