//! Pipeline: scan, format and write a report in one call

mod options;

pub use options::ScanOptions;

use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::HasherError;
use crate::report::{write_report, Report, ReportFilename};
use crate::scanner::Scanner;

/// Scan `root` with default options and write the report to the working directory
///
/// # Errors
/// See [`run_scan_with`].
pub fn run_scan(root: &str) -> Result<PathBuf, HasherError> {
    run_scan_with(root, &ScanOptions::default())
}

/// Scan `root`, write the report and return its absolute path
///
/// # Errors
/// Returns [`HasherError::InvalidRoot`] if `root` is not a directory,
/// [`HasherError::ReportWriteFailed`] if the report cannot be written, and
/// [`HasherError::UnreadableFile`] under the strict unreadable-file policy.
pub fn run_scan_with(root: &str, options: &ScanOptions) -> Result<PathBuf, HasherError> {
    if !Path::new(root).is_dir() {
        return Err(HasherError::InvalidRoot { path: root.into() });
    }
    info!("Scanning folder: {}", root);

    let result = Scanner::new(root)
        .with_policy(options.unreadable)
        .with_sorted(options.sorted)
        .scan()?;
    info!("Hashed {} files", result.hashed().count());

    let report = Report::format(root, &result);
    let filename = ReportFilename::now(root);
    let dir = output_dir(options).map_err(|e| {
        let unresolved = options
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        HasherError::report_write(unresolved.join(filename.as_str()), e)
    })?;

    let path = write_report(&report, &filename, &dir)?;
    info!("✓ Report written to {}", path.display());
    Ok(path)
}

/// Absolute directory the report is written to
fn output_dir(options: &ScanOptions) -> std::io::Result<PathBuf> {
    match &options.output_dir {
        Some(dir) if dir.is_absolute() => Ok(dir.clone()),
        Some(dir) => Ok(env::current_dir()?.join(dir)),
        None => env::current_dir(),
    }
}
