//! filehasher-core: Recursive SHA-512 digest reports for directory trees
//!
//! Walks a root directory, hashes every regular file beneath it and writes
//! a plain UTF-8 report mapping each file to its digest.
//!
//! # Pipeline
//!
//! - **scanner** - tree traversal and single-file hashing
//! - **report** - path relativization, formatting, filename derivation and writing
//! - **pipeline** - [`run_scan`], the single entry point for callers

pub mod digest;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use digest::{digest, DigestValue, DIGEST_LEN};
pub use error::{FailureCause, HasherError};
pub use pipeline::{run_scan, run_scan_with, ScanOptions};
pub use report::{Report, ReportFilename};
pub use scanner::{
    hash_file, FileOutcome, HashError, ScanResult, ScannedFile, Scanner, UnreadablePolicy,
};
