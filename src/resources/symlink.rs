//! Symlink resource: where a repository file should be linked, and what is
//! there now.
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::LinkState;
use super::error::ResourceError;
use super::helpers::fs::{create_symlink, ensure_parent_dir, prune_empty_parent, remove_symlink};

/// The two ends of a managed link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    /// Repository-relative path of the managed file.
    pub entry: PathBuf,
    /// Where the symlink lives, under the home directory.
    pub symlink_path: PathBuf,
    /// Absolute path of the repository file the symlink points at.
    pub real_path: PathBuf,
}

/// Map a repository entry to its link location and repository file.
///
/// The link location is `home/.<entry>`; an entry that already starts with a
/// dot is used as is.  The dot is applied to the whole relative path, so
/// `config/git/config` maps to `home/.config/git/config`.  `root` must be
/// the canonical absolute repository root.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidEntry`] if `entry` is empty, absolute, or
/// contains `..`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use dotstribute::resources::symlink::resolve;
///
/// let spec = resolve(Path::new("bashrc"), Path::new("/repo"), Path::new("/home/user")).unwrap();
/// assert_eq!(spec.symlink_path, PathBuf::from("/home/user/.bashrc"));
/// assert_eq!(spec.real_path, PathBuf::from("/repo/bashrc"));
/// ```
pub fn resolve(entry: &Path, root: &Path, home: &Path) -> Result<LinkSpec, ResourceError> {
    let invalid = |reason: &str| ResourceError::InvalidEntry {
        entry: entry.to_path_buf(),
        reason: reason.to_string(),
    };
    if entry.as_os_str().is_empty() {
        return Err(invalid("empty path"));
    }
    for component in entry.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err(invalid("contains a parent directory component")),
            Component::RootDir | Component::Prefix(_) => return Err(invalid("absolute path")),
        }
    }

    Ok(LinkSpec {
        entry: entry.to_path_buf(),
        symlink_path: home.join(dotted(entry)),
        real_path: root.join(entry),
    })
}

/// Prefix `entry` with a single dot unless it already starts with one.
fn dotted(entry: &Path) -> PathBuf {
    if entry.as_os_str().as_encoded_bytes().first() == Some(&b'.') {
        return entry.to_path_buf();
    }
    let mut name = OsString::from(".");
    name.push(entry.as_os_str());
    PathBuf::from(name)
}

/// Classify what currently exists at `symlink_path` relative to `real_path`.
///
/// A dangling symlink still exists: it is reported as
/// [`LinkState::WrongSymlink`], never as [`LinkState::Absent`].
///
/// # Errors
///
/// Returns [`ResourceError::Inspect`] if the location cannot be stat'ed for
/// any reason other than not existing, or the link cannot be read.
pub fn inspect(symlink_path: &Path, real_path: &Path) -> Result<LinkState, ResourceError> {
    let to_err = |source| ResourceError::Inspect {
        path: symlink_path.to_path_buf(),
        source,
    };

    let meta = match std::fs::symlink_metadata(symlink_path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LinkState::Absent),
        Err(e) => return Err(to_err(e)),
    };

    if !meta.file_type().is_symlink() {
        return Ok(LinkState::OccupiedNonSymlink {
            is_dir: meta.is_dir(),
        });
    }

    let points_to = std::fs::read_link(symlink_path).map_err(to_err)?;
    let expected = dunce::canonicalize(real_path).unwrap_or_else(|_| real_path.to_path_buf());
    match dunce::canonicalize(symlink_path) {
        Ok(resolved) if resolved == expected => Ok(LinkState::CorrectSymlink),
        _ => Ok(LinkState::WrongSymlink { points_to }),
    }
}

impl LinkSpec {
    /// Inspect the current state of this link.
    ///
    /// # Errors
    ///
    /// See [`inspect`].
    pub fn state(&self) -> Result<LinkState, ResourceError> {
        inspect(&self.symlink_path, &self.real_path)
    }

    /// Create missing parent directories, then the symlink itself.
    ///
    /// # Errors
    ///
    /// Returns an error if either step fails.
    pub fn create(&self) -> Result<(), ResourceError> {
        ensure_parent_dir(&self.symlink_path)?;
        create_symlink(&self.real_path, &self.symlink_path)
    }

    /// Remove the symlink, then its parent directory if that is now empty and
    /// is not `home`.  Returns the pruned directory, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the link or the emptied parent cannot be removed.
    pub fn remove(&self, home: &Path) -> Result<Option<PathBuf>, ResourceError> {
        remove_symlink(&self.symlink_path)?;
        prune_empty_parent(&self.symlink_path, home)
    }
}
