//! Scan results

use std::path::{Path, PathBuf};

use crate::digest::DigestValue;
use crate::error::FailureCause;

/// Outcome of hashing one discovered file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Hashed(DigestValue),
    /// Kept only under [`UnreadablePolicy::Flag`](super::UnreadablePolicy::Flag)
    Unreadable(FailureCause),
}

impl FileOutcome {
    #[must_use]
    pub fn digest(&self) -> Option<&DigestValue> {
        match self {
            Self::Hashed(value) => Some(value),
            Self::Unreadable(_) => None,
        }
    }
}

/// A file discovered during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Files found under a root, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    files: Vec<ScannedFile>,
}

impl ScanResult {
    pub(crate) fn push(&mut self, path: PathBuf, outcome: FileOutcome) {
        self.files.push(ScannedFile { path, outcome });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScannedFile> {
        self.files.iter()
    }

    /// Only the files that were hashed successfully
    pub fn hashed(&self) -> impl Iterator<Item = (&Path, &DigestValue)> {
        self.files
            .iter()
            .filter_map(|f| f.outcome.digest().map(|d| (f.path.as_path(), d)))
    }

    /// Look up the digest recorded for `path`
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&DigestValue> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .and_then(|f| f.outcome.digest())
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a ScannedFile;
    type IntoIter = std::slice::Iter<'a, ScannedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
