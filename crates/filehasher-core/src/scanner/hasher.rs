//! Single-file hashing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::digest::{digest, DigestValue};
use crate::error::FailureCause;

/// Failure to hash a single file
#[derive(Debug, Error)]
#[error("Failed to read '{}': {source}", .path.display())]
pub struct HashError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl HashError {
    /// Cause category of the read failure
    #[must_use]
    pub fn cause(&self) -> FailureCause {
        FailureCause::from(&self.source)
    }
}

/// Read the whole file at `path` and digest its content
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn hash_file(path: impl AsRef<Path>) -> Result<DigestValue, HashError> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| HashError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(digest(&content))
}
