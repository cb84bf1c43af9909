//! File command: Print the digest of a single file

use std::path::Path;

use anyhow::Result;
use filehasher_core::{hash_file, DigestValue};

/// `<digest>  <path>`, the layout `sha512sum` prints
#[must_use]
pub fn digest_line(digest: &DigestValue, path: &Path) -> String {
    format!("{digest}  {}", path.display())
}

/// Run the file command
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn run(path: &Path) -> Result<DigestValue> {
    let digest = hash_file(path)?;
    println!("{}", digest_line(&digest, path));
    Ok(digest)
}
