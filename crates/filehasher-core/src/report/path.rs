//! Path relativization
//!
//! Report paths start at the root's own folder name. Both `/` and `\`
//! are accepted as separators in the root string.

use std::path::Path;

/// Folder name used when the root contains no separator
pub const FOLDER_NAME_FALLBACK: &str = "null";

const SEPARATORS: [char; 2] = ['/', '\\'];

fn trim_root(root: &str) -> &str {
    let trimmed = root.trim_end_matches(&SEPARATORS[..]);
    if trimmed.is_empty() {
        root
    } else {
        trimmed
    }
}

/// Byte offset where the last segment of `root` begins, if it has a separator
fn last_segment_start(root: &str) -> Option<usize> {
    root.rfind('/')
        .or_else(|| root.rfind('\\'))
        .map(|idx| idx + 1)
}

/// Deepest folder name of `root`
///
/// `/` is checked first, `\` second. Returns `None` when neither occurs.
#[must_use]
pub fn folder_name(root: &str) -> Option<&str> {
    let root = trim_root(root);
    last_segment_start(root).map(|start| &root[start..])
}

/// [`folder_name`], or [`FOLDER_NAME_FALLBACK`]
#[must_use]
pub fn folder_name_or_fallback(root: &str) -> &str {
    folder_name(root).unwrap_or(FOLDER_NAME_FALLBACK)
}

/// Path of `file` as shown in the report, beginning with the root's folder name
///
/// A root without any separator is its own last segment, so its entries
/// start with the whole root. Only the report filename uses
/// [`FOLDER_NAME_FALLBACK`] for such a root.
#[must_use]
pub fn display_path(root: &str, file: &Path) -> String {
    let trimmed = trim_root(root);
    let segment = &trimmed[last_segment_start(trimmed).unwrap_or(0)..];

    match file.strip_prefix(root) {
        Ok(rel) => Path::new(segment).join(rel).display().to_string(),
        Err(_) => file.display().to_string(),
    }
}
