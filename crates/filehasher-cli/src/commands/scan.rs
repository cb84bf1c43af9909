//! Scan command: Hash a folder and write its report

use std::path::{Path, PathBuf};

use anyhow::Result;
use filehasher_core::{run_scan_with, ScanOptions};

/// Message shown after a report was written
#[must_use]
pub fn success_message(report: &Path) -> String {
    format!("Successfully created {} as the Output File!", report.display())
}

/// Run the scan command
///
/// # Errors
/// Returns an error if the root is not a folder or the report cannot be written.
pub fn run(path: &str, options: &ScanOptions) -> Result<PathBuf> {
    let report = run_scan_with(path, options)?;
    println!("{}", success_message(&report));
    Ok(report)
}
