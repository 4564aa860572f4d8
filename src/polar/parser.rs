//! Polar Beat CSV export parser.
//!
//! An export has a fixed layout:
//!
//! | Line | Contents                                               |
//! |------|--------------------------------------------------------|
//! | 1    | summary column names (ignored)                         |
//! | 2    | summary values at fixed offsets                        |
//! | 3    | sample column names, including `Time` and `HR (bpm)`   |
//! | 4..  | one sample per elapsed second                          |
//!
//! Blank lines are skipped before the layout is applied.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::ExportError;
use crate::polar::downsample::{SAMPLE_INTERVAL_SECS, seconds_of};
use crate::polar::types::{HeartRateSample, SessionExport};

const SUMMARY_DATE: usize = 2;
const SUMMARY_START_TIME: usize = 3;
const SUMMARY_DURATION: usize = 4;
const SUMMARY_AVERAGE_HR: usize = 6;
const SUMMARY_CALORIES: usize = 11;

pub const TIME_COLUMN: &str = "Time";
pub const HEART_RATE_COLUMN: &str = "HR (bpm)";

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn next_row(
    rows: &mut impl Iterator<Item = csv::Result<StringRecord>>,
    line: usize,
    what: &'static str,
) -> Result<StringRecord, ExportError> {
    Ok(rows.next().ok_or(ExportError::MissingLine { line, what })??)
}

fn column_index(columns: &StringRecord, name: &'static str) -> Result<usize, ExportError> {
    columns
        .iter()
        .position(|column| column == name)
        .ok_or(ExportError::MissingColumn { name })
}

/// Parses the text of a Polar Beat export.
///
/// # Errors
///
/// Fails if a layout line is missing, the summary row is too short, a sample
/// column is absent, a sample has a malformed time, or a sample kept by
/// downsampling has a malformed heart rate. Unreadable heart rates between
/// retained samples are skipped.
pub fn parse_export(text: &str) -> Result<SessionExport, ExportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = reader
        .records()
        .filter(|row| !matches!(row, Ok(record) if is_blank(record)));

    next_row(&mut rows, 1, "summary columns")?;
    let summary = next_row(&mut rows, 2, "summary values")?;
    if summary.len() <= SUMMARY_CALORIES {
        return Err(ExportError::ShortSummary {
            found: summary.len(),
            expected: SUMMARY_CALORIES + 1,
        });
    }
    let columns = next_row(&mut rows, 3, "sample columns")?;
    let time_idx = column_index(&columns, TIME_COLUMN)?;
    let hr_idx = column_index(&columns, HEART_RATE_COLUMN)?;

    let mut samples = Vec::new();
    for row in rows {
        let row = row?;
        let line = row.position().map_or(0, |pos| pos.line() as usize);

        let time = row.get(time_idx).unwrap_or_default();
        let Some(secs) = seconds_of(time) else {
            return Err(ExportError::InvalidTimestamp {
                line,
                value: time.to_string(),
            });
        };

        let raw_hr = row.get(hr_idx).unwrap_or_default();
        let heart_rate = match raw_hr.parse::<u32>() {
            Ok(heart_rate) => heart_rate,
            // Only retained samples need a readable heart rate.
            Err(_) if secs % SAMPLE_INTERVAL_SECS != 0 => continue,
            Err(_) => {
                return Err(ExportError::InvalidHeartRate {
                    line,
                    value: raw_hr.to_string(),
                });
            }
        };

        samples.push(HeartRateSample {
            time: time.to_string(),
            heart_rate,
        });
    }

    Ok(SessionExport {
        date: summary[SUMMARY_DATE].to_string(),
        start_time: summary[SUMMARY_START_TIME].to_string(),
        duration: summary[SUMMARY_DURATION].to_string(),
        average_hr: summary[SUMMARY_AVERAGE_HR].to_string(),
        calories: summary[SUMMARY_CALORIES].to_string(),
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY: &str = "Name,Sport,Date,Start time,Duration,Total distance (km),Average heart rate (bpm),Average speed (km/h),Max speed (km/h),Average pace (min/km),Max pace (min/km),Calories,Fat percentage of calories(%)\n\
        Jo Doe,OTHER,05-03-2024,18:30:00,00:00:03,,112,,,,,245,41\n";

    fn export(samples: &str) -> String {
        format!("{SUMMARY}Sample rate,Time,HR (bpm),Speed (km/h)\n{samples}")
    }

    #[test]
    fn test_parse_summary_fields() {
        let parsed = parse_export(&export("1,00:00:00,90,\n")).unwrap();

        assert_eq!(parsed.date, "05-03-2024");
        assert_eq!(parsed.start_time, "18:30:00");
        assert_eq!(parsed.duration, "00:00:03");
        assert_eq!(parsed.average_hr, "112");
        assert_eq!(parsed.calories, "245");
    }

    #[test]
    fn test_parse_samples_by_column_name() {
        let parsed = parse_export(&export("1,00:00:00,90,\n,00:00:01,91,\n")).unwrap();

        assert_eq!(
            parsed.samples,
            vec![
                HeartRateSample {
                    time: "00:00:00".to_string(),
                    heart_rate: 90,
                },
                HeartRateSample {
                    time: "00:00:01".to_string(),
                    heart_rate: 91,
                },
            ]
        );
    }

    #[test]
    fn test_parse_skips_blank_lines_and_crlf() {
        let text = export("1,00:00:00,90,\n\n   \n,00:00:01,91,\n").replace('\n', "\r\n");
        let parsed = parse_export(&text).unwrap();

        assert_eq!(parsed.samples.len(), 2);
        assert_eq!(parsed.calories, "245");
    }

    #[test]
    fn test_missing_header_lines() {
        let err = parse_export("only one line\n").unwrap_err();
        assert!(matches!(err, ExportError::MissingLine { line: 2, .. }));
    }

    #[test]
    fn test_short_summary_row() {
        let err = parse_export("a,b\n1,2,05-03-2024\nTime,HR (bpm)\n").unwrap_err();
        assert!(matches!(
            err,
            ExportError::ShortSummary {
                found: 3,
                expected: 12
            }
        ));
    }

    #[test]
    fn test_missing_heart_rate_column() {
        let text = format!("{SUMMARY}Sample rate,Time,Speed (km/h)\n1,00:00:00,3\n");
        let err = parse_export(&text).unwrap_err();
        assert!(matches!(
            err,
            ExportError::MissingColumn { name: HEART_RATE_COLUMN }
        ));
    }

    #[test]
    fn test_invalid_sample_values() {
        let err = parse_export(&export("1,0:00,90,\n")).unwrap_err();
        assert!(matches!(err, ExportError::InvalidTimestamp { line: 4, .. }));

        let err = parse_export(&export("1,00:00:00,fast,\n")).unwrap_err();
        assert!(matches!(err, ExportError::InvalidHeartRate { line: 4, .. }));
    }

    #[test]
    fn test_blank_heart_rate_between_retained_samples_is_skipped() {
        let text = format!("{SUMMARY}Sample rate,Time,HR (bpm)\n1,00:00:00,90\n,00:00:01,\n,00:00:02,92\n");
        let parsed = parse_export(&text).unwrap();

        let times: Vec<&str> = parsed.samples.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, ["00:00:00", "00:00:02"]);

        let session = crate::polar::downsample::into_session(parsed).unwrap();
        assert_eq!(session.max_hr, 90);
    }

    #[test]
    fn test_blank_heart_rate_on_retained_sample_fails() {
        let err = parse_export(&export("1,00:00:00,90,\n,00:00:30,,\n")).unwrap_err();
        assert!(matches!(
            err,
            ExportError::InvalidHeartRate { line: 5, ref value } if value.is_empty()
        ));
    }
}
