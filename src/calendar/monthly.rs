//! Monthly summary notes with the weight trend chart.

use crate::calendar::days::month_name;
use crate::output::Note;

/// Monthly template; the chart script is copied into notes untouched.
pub const MONTHLY_TEMPLATE: &str = include_str!("../../templates/monthly-summary.md");

pub fn monthly_note(year: i32, month: u32) -> Note {
    let contents = MONTHLY_TEMPLATE
        .replace("{{YEAR}}", &year.to_string())
        .replace("{{MONTH}}", &month.to_string())
        .replace("{{MONTH_NAME}}", month_name(month).unwrap_or_default());

    Note::new(format!("{year}-{month:02}-summary.md"), contents)
}

/// One note per month of `year`.
pub fn monthly_notes(year: i32) -> Vec<Note> {
    (1..=12).map(|month| monthly_note(year, month)).collect()
}
