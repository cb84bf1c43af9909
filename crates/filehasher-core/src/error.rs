//! Errors surfaced to callers of the pipeline

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Category of the underlying cause of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    PermissionDenied,
    NotFound,
    AlreadyExists,
    Other,
}

impl From<io::ErrorKind> for FailureCause {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::AlreadyExists => Self::AlreadyExists,
            _ => Self::Other,
        }
    }
}

impl From<&io::Error> for FailureCause {
    fn from(err: &io::Error) -> Self {
        err.kind().into()
    }
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PermissionDenied => "permission denied",
            Self::NotFound => "not found",
            Self::AlreadyExists => "already exists",
            Self::Other => "I/O error",
        };
        write!(f, "{s}")
    }
}

/// Fatal errors of a scan
#[derive(Debug, Error)]
pub enum HasherError {
    #[error("Given folder '{}' is not a folder, re-check that!", .path.display())]
    InvalidRoot { path: PathBuf },

    #[error(
        "An error occurred while creating the output file '{}' ({cause}), make sure the program has the rights to do so!",
        .path.display()
    )]
    ReportWriteFailed {
        path: PathBuf,
        cause: FailureCause,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read '{}' ({cause})", .path.display())]
    UnreadableFile {
        path: PathBuf,
        cause: FailureCause,
        #[source]
        source: io::Error,
    },
}

impl HasherError {
    pub(crate) fn report_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReportWriteFailed {
            path: path.into(),
            cause: FailureCause::from(&source),
            source,
        }
    }

    /// Cause category, if the error wraps an I/O failure
    #[must_use]
    pub fn cause(&self) -> Option<FailureCause> {
        match self {
            Self::InvalidRoot { .. } => None,
            Self::ReportWriteFailed { cause, .. } | Self::UnreadableFile { cause, .. } => {
                Some(*cause)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_from_io_kind() {
        assert_eq!(
            FailureCause::from(io::ErrorKind::PermissionDenied),
            FailureCause::PermissionDenied
        );
        assert_eq!(FailureCause::from(io::ErrorKind::NotFound), FailureCause::NotFound);
        assert_eq!(
            FailureCause::from(io::ErrorKind::AlreadyExists),
            FailureCause::AlreadyExists
        );
        assert_eq!(FailureCause::from(io::ErrorKind::Interrupted), FailureCause::Other);
    }

    #[test]
    fn test_invalid_root_message_names_path() {
        let err = HasherError::InvalidRoot {
            path: PathBuf::from("not/valid/path"),
        };
        assert!(err.to_string().contains("'not/valid/path'"));
        assert_eq!(err.cause(), None);
    }

    #[test]
    fn test_report_write_message_names_path_and_cause() {
        let err = HasherError::report_write(
            "/out/report.txt",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        let msg = err.to_string();
        assert!(msg.contains("/out/report.txt"));
        assert!(msg.contains("permission denied"));
        assert_eq!(err.cause(), Some(FailureCause::PermissionDenied));
    }
}
