//! Symlink primitives: path resolution, state inspection, create and remove.
pub mod error;
pub mod helpers;
pub mod symlink;

use std::path::PathBuf;

/// What currently exists at a link location, relative to the repository file
/// it should point at.
///
/// Always computed fresh; the filesystem may change between runs.
///
/// # Examples
///
/// ```
/// use dotstribute::resources::LinkState;
///
/// let blocked = LinkState::OccupiedNonSymlink { is_dir: false };
/// assert!(blocked.is_blocking());
/// assert!(!LinkState::Absent.is_blocking());
/// assert!(!LinkState::CorrectSymlink.is_blocking());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    /// Nothing exists at the link location (not even a dangling symlink).
    Absent,
    /// A symlink whose ultimate target is the repository file.
    CorrectSymlink,
    /// A symlink that resolves elsewhere, or does not resolve at all.
    WrongSymlink {
        /// Raw target of the existing link.
        points_to: PathBuf,
    },
    /// A real file or directory.
    OccupiedNonSymlink {
        /// Whether the occupant is a directory.
        is_dir: bool,
    },
}

impl LinkState {
    /// Status symbol shown in front of each file line.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Absent => "🚀",
            Self::CorrectSymlink => "🔗",
            Self::WrongSymlink { .. } | Self::OccupiedNonSymlink { is_dir: false } => "❌",
            Self::OccupiedNonSymlink { is_dir: true } => "📁",
        }
    }

    /// Short human-readable description.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Absent => "not linked".to_string(),
            Self::CorrectSymlink => "already linked".to_string(),
            Self::WrongSymlink { points_to } => {
                format!("symlink points to {}", points_to.display())
            }
            Self::OccupiedNonSymlink { is_dir: true } => "occupied by a directory".to_string(),
            Self::OccupiedNonSymlink { is_dir: false } => {
                "occupied by a regular file".to_string()
            }
        }
    }

    /// Return `true` if something this tool does not manage sits at the location.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(
            self,
            Self::WrongSymlink { .. } | Self::OccupiedNonSymlink { .. }
        )
    }
}
