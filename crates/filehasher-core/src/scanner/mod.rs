//! Scanner module: File discovery and content hashing
//!
//! Responsible for walking a directory tree and computing the digest
//! of every regular file found beneath it.

mod hasher;
mod result;
mod walker;

pub use hasher::{hash_file, HashError};
pub use result::{FileOutcome, ScanResult, ScannedFile};
pub use walker::{Scanner, UnreadablePolicy};
