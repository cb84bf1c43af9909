//! Report persistence

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use super::filename::ReportFilename;
use super::format::Report;
use crate::error::HasherError;

/// Write `report` as UTF-8 to `dir/filename` and return the destination path
///
/// Content goes to a temporary file in `dir` first and is renamed into
/// place once complete, so no partial report is ever visible. The file
/// gets the same mode as one created with `fs::write`.
///
/// # Errors
/// Returns [`HasherError::ReportWriteFailed`] if the file cannot be created,
/// written or moved into place.
pub fn write_report(
    report: &Report,
    filename: &ReportFilename,
    dir: &Path,
) -> Result<PathBuf, HasherError> {
    let dest = dir.join(filename.as_str());

    let mut tmp = temp_file_in(dir).map_err(|e| HasherError::report_write(&dest, e))?;
    tmp.write_all(report.as_str().as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| HasherError::report_write(&dest, e))?;
    tmp.persist(&dest)
        .map_err(|e| HasherError::report_write(&dest, e.error))?;

    debug!("Wrote {} bytes to {}", report.as_str().len(), dest.display());
    Ok(dest)
}

/// Temporary file in `dir`, created `0o666` minus umask on unix
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        builder.permissions(Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
