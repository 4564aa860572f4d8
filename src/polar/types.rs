//! Data types for Polar Beat session exports.

/// One heart rate reading at an elapsed time of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartRateSample {
    /// Elapsed time since session start, `HH:MM:SS`.
    pub time: String,
    pub heart_rate: u32,
}

/// An export as read from disk, at full per-second resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExport {
    /// Session date as exported, `dd-mm-yyyy`.
    pub date: String,
    pub start_time: String,
    pub duration: String,
    pub average_hr: String,
    pub calories: String,
    pub samples: Vec<HeartRateSample>,
}

/// A session ready to be rendered: samples downsampled, maximum computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub date: String,
    pub start_time: String,
    pub duration: String,
    pub average_hr: String,
    pub max_hr: u32,
    pub calories: String,
    pub samples: Vec<HeartRateSample>,
}
