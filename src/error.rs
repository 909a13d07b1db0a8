//! Domain-specific error types for dotstribute.
//!
//! Internal modules return typed errors (e.g., [`ConfigError`], [`WalkError`])
//! while the command layer at the CLI boundary converts them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! DotstributeError
//! ├── Config(ConfigError)      — home/root resolution, ignore file
//! ├── Walk(WalkError)          — repository traversal
//! └── Resource(ResourceError)  — inspecting, creating, removing links
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub use crate::resources::error::ResourceError;

/// Top-level error type for dotstribute.
#[derive(Error, Debug)]
pub enum DotstributeError {
    /// Configuration-related error (home directory, repository root, ignore file).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Repository traversal error.
    #[error("Traversal error: {0}")]
    Walk(#[from] WalkError),

    /// Symlink inspection or mutation error.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

/// Errors that arise while building the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `HOME` nor (on Windows) `USERPROFILE` is set.
    #[error("unable to find the home directory: {0}")]
    HomeNotFound(String),

    /// The repository root does not exist or cannot be canonicalized.
    #[error("invalid repository root {path}: {source}")]
    Root {
        /// Root path as given.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The ignore file exists but could not be read.
    #[error("unable to read ignore file {path}: {source}")]
    IgnoreFile {
        /// Path of the ignore file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise while walking the dotfile repository.
#[derive(Error, Debug)]
pub enum WalkError {
    /// Reading a directory or entry failed mid-walk.
    #[error("walking {path}: {source}")]
    Traversal {
        /// Path being visited when the error occurred.
        path: PathBuf,
        /// Underlying walkdir error.
        source: walkdir::Error,
    },

    /// A visited entry was not located under the traversal root.
    #[error("{path} is not inside {root}")]
    OutsideRoot {
        /// The offending entry.
        path: PathBuf,
        /// Traversal root.
        root: PathBuf,
    },
}
