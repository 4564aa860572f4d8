//! Daily journal summary notes.

use chrono::NaiveDate;

use crate::calendar::days::days_of_year;
use crate::output::Note;

/// Daily template; its dataviewjs blocks are copied into notes untouched.
pub const DAILY_TEMPLATE: &str = include_str!("../../templates/daily-summary.md");

const DATE_PLACEHOLDER: &str = "{{DATE}}";

pub fn daily_note(date: NaiveDate) -> Note {
    let iso = date.format("%Y-%m-%d").to_string();
    Note::new(
        format!("{iso}-Summary.md"),
        DAILY_TEMPLATE.replacen(DATE_PLACEHOLDER, &iso, 1),
    )
}

/// One note per day of `year`.
pub fn daily_notes(year: i32) -> Vec<Note> {
    days_of_year(year).into_iter().map(daily_note).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_daily_note() {
        let note = daily_note(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        assert_eq!(note.path, PathBuf::from("2024-02-29-Summary.md"));
        assert!(note.contents.starts_with("---\ngraph-key: journal\ndate: 2024-02-29\n---\n"));
        assert!(!note.contents.contains(DATE_PLACEHOLDER));
    }

    #[test]
    fn test_template_body_is_copied_verbatim() {
        let note = daily_note(NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());
        let (_, body) = DAILY_TEMPLATE.split_once(DATE_PLACEHOLDER).unwrap();
        assert!(note.contents.ends_with(body));
        assert!(note.contents.contains("window.renderChart(chartData, this.container);"));
    }

    #[test]
    fn test_daily_notes_per_year() {
        assert_eq!(daily_notes(2023).len(), 365);
        assert_eq!(daily_notes(2024).len(), 366);

        let february = daily_notes(2023)
            .into_iter()
            .filter(|n| n.path.to_string_lossy().starts_with("2023-02-"))
            .count();
        assert_eq!(february, 28);
    }
}
