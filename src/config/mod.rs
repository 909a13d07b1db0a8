//! Run configuration.
//!
//! Every process-wide input (repository root, home directory, ignore file) is
//! resolved exactly once here and then passed explicitly to the walker and
//! the reconciler.
pub mod ignore;

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::tasks::Mode;
use ignore::UnreadableIgnore;

/// Resolved configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical absolute path of the dotfiles repository.
    pub root: PathBuf,
    /// Home directory links are created under.
    pub home: PathBuf,
    /// Absolute path of the ignore list.
    pub ignore_file: PathBuf,
    /// Handling of an ignore file that cannot be read for lack of permission.
    pub unreadable_ignore: UnreadableIgnore,
    /// Link or unlink.
    pub mode: Mode,
    /// Report intended actions without touching the filesystem.
    pub preview: bool,
    /// Confirm every change interactively.
    pub ask: bool,
}

impl Config {
    /// Build the configuration from parsed CLI arguments and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or the
    /// repository root cannot be canonicalized.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let home = resolve_home(|key| std::env::var(key).ok())?;
        let root = resolve_root(cli.root.as_deref())?;
        Ok(Self::new(root, home, cli))
    }

    /// Assemble a configuration from already-resolved root and home paths.
    #[must_use]
    pub fn new(root: PathBuf, home: PathBuf, cli: &Cli) -> Self {
        let ignore_file = root.join(&cli.ignore_file);
        Self {
            root,
            home,
            ignore_file,
            unreadable_ignore: if cli.strict_ignore {
                UnreadableIgnore::Fail
            } else {
                UnreadableIgnore::Warn
            },
            mode: if cli.unlink { Mode::Unlink } else { Mode::Link },
            preview: cli.preview,
            ask: cli.ask,
        }
    }
}

/// Determine the home directory from the environment.
///
/// Uses `HOME`; on Windows `USERPROFILE` is tried first.  Empty values are
/// treated as unset.
///
/// # Errors
///
/// Returns [`ConfigError::HomeNotFound`] if no usable variable is set.
pub fn resolve_home(var: impl Fn(&str) -> Option<String>) -> Result<PathBuf, ConfigError> {
    let keys: &[&str] = if cfg!(windows) {
        &["USERPROFILE", "HOME"]
    } else {
        &["HOME"]
    };
    keys.iter()
        .find_map(|key| var(key).filter(|v| !v.is_empty()))
        .map(PathBuf::from)
        .ok_or_else(|| ConfigError::HomeNotFound(format!("{} is not set", keys.join(" or "))))
}

/// Determine the canonical repository root.
///
/// Uses `explicit` when given, otherwise the current working directory.
///
/// # Errors
///
/// Returns [`ConfigError::Root`] if the directory cannot be resolved.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let root = match explicit {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|source| ConfigError::Root {
            path: PathBuf::from("."),
            source,
        })?,
    };
    dunce::canonicalize(&root).map_err(|source| ConfigError::Root { path: root, source })
}
