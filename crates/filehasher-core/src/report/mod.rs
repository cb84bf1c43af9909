//! Report module: Formatting and persisting scan reports
//!
//! Turns a [`ScanResult`](crate::scanner::ScanResult) into the canonical
//! text report, derives its filename and writes it to disk.

mod filename;
mod format;
mod path;
mod writer;

pub use filename::{ReportFilename, TIMESTAMP_FORMAT};
pub use format::{Report, HEADER_PREFIX, LINE_SEPARATOR, UNREADABLE_MARKER};
pub use path::{display_path, folder_name, folder_name_or_fallback, FOLDER_NAME_FALLBACK};
pub use writer::write_report;
