//! File walker: Discovers and hashes files in a directory tree

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::hasher::hash_file;
use super::result::{FileOutcome, ScanResult};
use crate::error::{FailureCause, HasherError};

/// What to do with a file that cannot be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnreadablePolicy {
    /// Leave the file out of the result
    #[default]
    Omit,
    /// Keep the file, marked as unreadable
    Flag,
    /// Abort the scan
    Fail,
}

/// Scanner for hashing every regular file under a root directory
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    policy: UnreadablePolicy,
    sorted: bool,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            policy: UnreadablePolicy::default(),
            sorted: false,
        }
    }

    /// Set the policy for files that fail to hash
    #[must_use]
    pub fn with_policy(mut self, policy: UnreadablePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Visit directory entries sorted by file name
    #[must_use]
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Hash every regular file below the root
    ///
    /// A root that is not a directory yields an empty result.
    ///
    /// # Errors
    /// Only under [`UnreadablePolicy::Fail`], when a file or directory
    /// cannot be read.
    pub fn scan(&self) -> Result<ScanResult, HasherError> {
        let mut result = ScanResult::default();
        if !self.root.is_dir() {
            debug!("Not a directory, nothing to scan: {}", self.root.display());
            return Ok(result);
        }

        let mut walker = WalkDir::new(&self.root).follow_links(true);
        if self.sorted {
            walker = walker.sort_by_file_name();
        }

        let mut discovered = 0usize;
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.walk_error(err)?;
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            discovered += 1;

            self.record(entry.into_path(), &mut result)?;
        }

        let hashed = result.hashed().count();
        if hashed != discovered {
            warn!(
                "Hashed {} of {} files under {}",
                hashed,
                discovered,
                self.root.display()
            );
        }
        Ok(result)
    }

    fn record(&self, path: PathBuf, result: &mut ScanResult) -> Result<(), HasherError> {
        match hash_file(&path) {
            Ok(value) => {
                debug!("Hashed {}", path.display());
                result.push(path, FileOutcome::Hashed(value));
            }
            Err(err) => {
                warn!("{err}");
                let cause = err.cause();
                match self.policy {
                    UnreadablePolicy::Omit => {}
                    UnreadablePolicy::Flag => result.push(path, FileOutcome::Unreadable(cause)),
                    UnreadablePolicy::Fail => {
                        return Err(HasherError::UnreadableFile {
                            path,
                            cause,
                            source: err.source,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn walk_error(&self, err: walkdir::Error) -> Result<(), HasherError> {
        warn!("Skipping entry: {err}");
        if self.policy != UnreadablePolicy::Fail {
            return Ok(());
        }
        let path = err
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
        Err(HasherError::UnreadableFile {
            path,
            cause: FailureCause::from(&source),
            source,
        })
    }
}
