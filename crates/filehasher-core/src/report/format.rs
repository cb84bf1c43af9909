//! Report formatting

use std::fmt;

use super::path::display_path;
use crate::scanner::{FileOutcome, ScanResult};

/// Prefix of the first report line
pub const HEADER_PREFIX: &str = "Path to scan: ";

/// Separator between report lines
pub const LINE_SEPARATOR: &str = "\n";

/// Written in place of a digest for files that could not be read
pub const UNREADABLE_MARKER: &str = "<unreadable>";

/// Immutable text report of one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    root: String,
    text: String,
}

impl Report {
    /// Render `result` as a report for `root`
    ///
    /// Entry order follows the scan result.
    #[must_use]
    pub fn format(root: &str, result: &ScanResult) -> Self {
        let entries: Vec<String> = result
            .iter()
            .map(|file| {
                let path = display_path(root, &file.path);
                match &file.outcome {
                    FileOutcome::Hashed(value) => format!("{path}: {value}"),
                    FileOutcome::Unreadable(_) => format!("{path}: {UNREADABLE_MARKER}"),
                }
            })
            .collect();

        let text = format!(
            "{HEADER_PREFIX}{root}{LINE_SEPARATOR}{}",
            entries.join(LINE_SEPARATOR)
        );
        Self {
            root: root.to_string(),
            text,
        }
    }

    /// Root the report was built for
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Full report text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Entry lines, without the header
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.text
            .split(LINE_SEPARATOR)
            .skip(1)
            .filter(|line| !line.is_empty())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
