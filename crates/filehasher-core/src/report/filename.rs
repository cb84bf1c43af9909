//! Report filename derivation

use std::fmt;

use chrono::{DateTime, Local};

use super::path::folder_name_or_fallback;

/// `yyyy-MM-dd_HH-mm-ss`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `<folder>-Hashes_<timestamp>.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilename(String);

impl ReportFilename {
    /// Filename for a report on `root` created at `at`
    #[must_use]
    pub fn new(root: &str, at: DateTime<Local>) -> Self {
        Self(format!(
            "{}-Hashes_{}.txt",
            folder_name_or_fallback(root),
            at.format(TIMESTAMP_FORMAT)
        ))
    }

    /// Filename for a report on `root` created now, in local time
    #[must_use]
    pub fn now(root: &str) -> Self {
        Self::new(root, Local::now())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
