//! File-system helpers for creating and removing managed links.
use std::path::{Path, PathBuf};

use crate::resources::error::ResourceError;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) with default permissions if necessary.
///
/// # Errors
///
/// Returns [`ResourceError::CreateDir`] if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), ResourceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ResourceError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Create a symlink at `link` pointing to `target`.
///
/// # Errors
///
/// Returns [`ResourceError::CreateLink`] if the OS refuses to create the link.
pub fn create_symlink(target: &Path, link: &Path) -> Result<(), ResourceError> {
    #[cfg(unix)]
    let result = std::os::unix::fs::symlink(target, link);

    #[cfg(windows)]
    let result = if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    };

    result.map_err(|source| ResourceError::CreateLink {
        link: link.to_path_buf(),
        target: target.to_path_buf(),
        source,
    })
}

/// Remove the symlink at `path` without touching what it points to.
///
/// On Windows, directory symlinks must be removed with `remove_dir` rather
/// than `remove_file`.
///
/// # Errors
///
/// Returns [`ResourceError::RemoveLink`] if the link cannot be removed.
pub fn remove_symlink(path: &Path) -> Result<(), ResourceError> {
    let to_err = |source| ResourceError::RemoveLink {
        path: path.to_path_buf(),
        source,
    };
    let meta = std::fs::symlink_metadata(path).map_err(to_err)?;
    if is_dir_like(&meta) {
        std::fs::remove_dir(path).map_err(to_err)
    } else {
        std::fs::remove_file(path).map_err(to_err)
    }
}

/// Check if metadata represents a directory-like entry.
///
/// On Windows `symlink_metadata().is_dir()` is `false` for directory
/// symlinks, so the raw `FILE_ATTRIBUTE_DIRECTORY` bit is checked instead.
fn is_dir_like(meta: &std::fs::Metadata) -> bool {
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        meta.file_attributes() & 0x10 != 0
    }
    #[cfg(not(windows))]
    {
        meta.is_dir()
    }
}

/// Remove the parent directory of `path` if it is now empty.
///
/// Only the immediate parent is considered; grandparents are left alone even
/// if they become empty.  `home` itself is never removed, and neither is a
/// parent that is a symlink.  Returns the removed directory, if any.
///
/// # Errors
///
/// Returns [`ResourceError::ReadDir`] or [`ResourceError::RemoveDir`] if the
/// parent cannot be listed or removed.
pub fn prune_empty_parent(path: &Path, home: &Path) -> Result<Option<PathBuf>, ResourceError> {
    let Some(parent) = path.parent() else {
        return Ok(None);
    };
    if parent == home || parent.as_os_str().is_empty() || !parent.starts_with(home) {
        return Ok(None);
    }

    let meta = std::fs::symlink_metadata(parent).map_err(|source| ResourceError::ReadDir {
        path: parent.to_path_buf(),
        source,
    })?;
    if meta.file_type().is_symlink() {
        return Ok(None);
    }

    let mut children = std::fs::read_dir(parent).map_err(|source| ResourceError::ReadDir {
        path: parent.to_path_buf(),
        source,
    })?;
    if children.next().is_some() {
        return Ok(None);
    }

    std::fs::remove_dir(parent).map_err(|source| ResourceError::RemoveDir {
        path: parent.to_path_buf(),
        source,
    })?;
    Ok(Some(parent.to_path_buf()))
}
