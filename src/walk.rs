//! Dotfile repository traversal.
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ignore::IgnoreList;
use crate::error::WalkError;

/// Collect every file under `root` that is not excluded by `ignore`.
///
/// The walk is depth-first and visits children in file-name order.  An
/// ignored directory is pruned along with everything beneath it; an ignored
/// file is skipped.  Directories themselves are never returned, and neither
/// is `root`.  Symlinks are not followed, so a link inside the repository is
/// returned as a leaf.
///
/// Returned paths are relative to `root`.
///
/// # Errors
///
/// Returns [`WalkError::Traversal`] on the first unreadable directory or
/// entry; no partial result is returned.
pub fn walk(root: &Path, ignore: &IgnoreList) -> Result<Vec<PathBuf>, WalkError> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !ignore.matches(&e.file_name().to_string_lossy()));

    for entry in walker {
        let entry = entry.map_err(|source| WalkError::Traversal {
            path: source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| WalkError::OutsideRoot {
                path: entry.path().to_path_buf(),
                root: root.to_path_buf(),
            })?;
        entries.push(relative.to_path_buf());
    }

    Ok(entries)
}
