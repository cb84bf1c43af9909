//! Scan options

use std::path::PathBuf;

use crate::scanner::UnreadablePolicy;

/// Options for [`run_scan_with`](super::run_scan_with)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub unreadable: UnreadablePolicy,
    pub sorted: bool,
    /// Defaults to the process working directory
    pub output_dir: Option<PathBuf>,
}

impl ScanOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for files that fail to hash
    #[must_use]
    pub fn with_unreadable(mut self, policy: UnreadablePolicy) -> Self {
        self.unreadable = policy;
        self
    }

    /// Sort report entries by path
    #[must_use]
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Write the report to `dir` instead of the working directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}
