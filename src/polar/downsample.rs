//! Heart rate downsampling.

use crate::error::ExportError;
use crate::polar::types::{HeartRateSample, SessionExport, SessionRecord};

/// Seconds between two retained samples.
pub const SAMPLE_INTERVAL_SECS: u32 = 30;

fn two_digits(field: &str, limit: u32) -> Option<u32> {
    if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok().filter(|&value| value < limit)
}

/// Converts an `HH:MM:SS` elapsed time into total seconds.
///
/// Returns `None` unless the input has exactly three two-digit fields with
/// minutes and seconds below 60.
pub fn seconds_of(time: &str) -> Option<u32> {
    let mut parts = time.split(':');
    let (h, m, s) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let h = two_digits(h, 100)?;
    let m = two_digits(m, 60)?;
    let s = two_digits(s, 60)?;

    Some(h * 3600 + m * 60 + s)
}

/// Keeps the samples whose elapsed time is a multiple of `interval` seconds.
///
/// Assumes one sample per elapsed second from `00:00:00`; gaps in the
/// source shift which samples survive.
pub fn downsample(samples: &[HeartRateSample], interval: u32) -> Vec<HeartRateSample> {
    samples
        .iter()
        .filter(|sample| seconds_of(&sample.time).is_some_and(|secs| secs % interval == 0))
        .cloned()
        .collect()
}

/// Highest heart rate among `samples`.
pub fn max_heart_rate(samples: &[HeartRateSample]) -> Result<u32, ExportError> {
    samples
        .iter()
        .map(|sample| sample.heart_rate)
        .max()
        .ok_or(ExportError::NoSamples)
}

/// Downsamples an export and computes its maximum heart rate.
///
/// The maximum is taken over the downsampled series, not the full one.
pub fn into_session(export: SessionExport) -> Result<SessionRecord, ExportError> {
    let samples = downsample(&export.samples, SAMPLE_INTERVAL_SECS);
    let max_hr = max_heart_rate(&samples)?;

    Ok(SessionRecord {
        date: export.date,
        start_time: export.start_time,
        duration: export.duration,
        average_hr: export.average_hr,
        max_hr,
        calories: export.calories,
        samples,
    })
}
