//! Ignore list loading and name matching.
//!
//! The ignore file holds one prefix per line.  A repository entry is ignored
//! when its *base name* starts with any prefix, wherever it sits in the tree,
//! so a `cache` line excludes `cache/`, `nvim/cache-dir/` and `cache.db`
//! alike.  There is no comment or glob syntax.
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConfigError;
use crate::logging::Log;

/// What to do when the ignore file exists but permission to read it is denied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnreadableIgnore {
    /// Warn and continue with an empty ignore list.
    #[default]
    Warn,
    /// Abort the run.
    Fail,
}

/// Ordered, immutable list of ignored name prefixes.
///
/// # Examples
///
/// ```
/// use dotstribute::config::ignore::IgnoreList;
///
/// let ignore = IgnoreList::parse(".git\nREADME\n\n");
/// assert!(ignore.matches(".gitignore"));
/// assert!(ignore.matches("README.md"));
/// assert!(!ignore.matches("bashrc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    prefixes: Vec<String>,
}

impl IgnoreList {
    /// Build an ignore list from explicit prefixes; empty prefixes are dropped.
    #[must_use]
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(Into::into)
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Parse ignore file content: one prefix per line, blank lines dropped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self::new(content.lines())
    }

    /// Load the ignore list from `path`.
    ///
    /// A missing file yields an empty list and a warning.  A permission error
    /// is handled according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IgnoreFile`] for any other read failure, or for a
    /// permission failure under [`UnreadableIgnore::Fail`].
    pub fn load(path: &Path, policy: UnreadableIgnore, log: &dyn Log) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let list = Self::parse(&content);
                log.debug(&format!(
                    "{} ignore prefixes from {}",
                    list.len(),
                    path.display()
                ));
                Ok(list)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log.warn(&format!(
                    "unable to find {}, continuing without it",
                    path.display()
                ));
                Ok(Self::default())
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied && policy == UnreadableIgnore::Warn => {
                log.warn(&format!(
                    "permission denied reading {}, continuing without it",
                    path.display()
                ));
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::IgnoreFile {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Return `true` if `name` starts with any ignored prefix.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }

    /// Number of prefixes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Return `true` if nothing is ignored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Iterate over the prefixes in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}
