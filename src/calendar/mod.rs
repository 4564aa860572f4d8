//! Journal notes generated from the calendar alone.

pub mod daily;
pub mod days;
pub mod monthly;

use std::sync::Arc;

use anyhow::{Result, ensure};
use chrono::NaiveDate;
use tracing::info;

use crate::output::{NoteSink, WriteReport, write_notes};

fn check_year(year: i32) -> Result<()> {
    ensure!(
        NaiveDate::from_ymd_opt(year, 1, 1).is_some() && NaiveDate::from_ymd_opt(year, 12, 31).is_some(),
        "year {year} is outside the supported calendar range"
    );
    Ok(())
}

/// Writes one summary note per day of `year`.
#[tracing::instrument(skip(sink))]
pub async fn generate_daily_summaries(year: i32, sink: Arc<dyn NoteSink>) -> Result<WriteReport> {
    check_year(year)?;
    let notes = daily::daily_notes(year);
    info!(notes = notes.len(), "Generating daily notes");
    write_notes(sink, notes).await.into_result()
}

/// Writes one summary note per month of `year`.
#[tracing::instrument(skip(sink))]
pub async fn generate_monthly_summaries(year: i32, sink: Arc<dyn NoteSink>) -> Result<WriteReport> {
    check_year(year)?;
    let notes = monthly::monthly_notes(year);
    info!(notes = notes.len(), "Generating monthly notes");
    write_notes(sink, notes).await.into_result()
}
