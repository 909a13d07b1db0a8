//! Typed error variants for symlink resource operations.
//!
//! Every variant is fatal for the run: the command layer stops processing
//! further files as soon as one of these is returned.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise from inspecting, creating, or removing managed links.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A repository entry cannot be mapped into the home directory.
    #[error("invalid repository entry {entry}: {reason}")]
    InvalidEntry {
        /// The entry as produced by the walker.
        entry: PathBuf,
        /// Why it was rejected.
        reason: String,
    },

    /// Link-stat or read-link of the target location failed.
    #[error("inspecting {path}: {source}")]
    Inspect {
        /// Location being inspected.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Creating the parent directories of a link failed.
    #[error("creating directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Creating the symlink itself failed.
    #[error("creating symlink {link} -> {target}: {source}")]
    CreateLink {
        /// Location of the new link.
        link: PathBuf,
        /// Path the link should point at.
        target: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Removing a managed symlink failed.
    #[error("removing symlink {path}: {source}")]
    RemoveLink {
        /// Link that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Listing a parent directory during cleanup failed.
    #[error("reading directory {path}: {source}")]
    ReadDir {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Removing an emptied parent directory failed.
    #[error("removing directory {path}: {source}")]
    RemoveDir {
        /// Directory that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
