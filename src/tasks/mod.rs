//! Reconciliation of repository files against the home directory.
mod context;
pub mod symlinks;

pub use context::Context;

use std::path::{Path, PathBuf};

use crate::error::{DotstributeError, ResourceError};
use crate::logging::FileStatus;
use crate::resources::LinkState;
use crate::resources::symlink::{LinkSpec, resolve};

/// Direction of a run, selected once from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Create missing symlinks.
    Link,
    /// Remove symlinks this tool created.
    Unlink,
}

/// Terminal result of reconciling one repository file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A symlink was created.
    Linked,
    /// A symlink was removed.
    Removed {
        /// Parent directory removed because it became empty.
        pruned: Option<PathBuf>,
    },
    /// The correct symlink was already in place.
    AlreadyLinked,
    /// There was nothing to remove.
    NotPresent,
    /// Preview mode; the action was only reported.
    Preview,
    /// The operator answered no.
    Declined,
    /// Something this tool does not manage occupies the link location.
    Blocked(LinkState),
}

impl Outcome {
    /// Summary bucket for this outcome.
    #[must_use]
    pub const fn status(&self) -> FileStatus {
        match self {
            Self::Linked | Self::Removed { .. } => FileStatus::Changed,
            Self::AlreadyLinked | Self::NotPresent => FileStatus::Unchanged,
            Self::Preview => FileStatus::Preview,
            Self::Declined => FileStatus::Declined,
            Self::Blocked(_) => FileStatus::Blocked,
        }
    }

    /// Symbol of the state the file was found in.
    ///
    /// Only [`Outcome::Blocked`] carries its state; for the rest it follows
    /// from the outcome and `mode`.
    #[must_use]
    pub const fn symbol(&self, mode: Mode) -> &'static str {
        match (self, mode) {
            (Self::Blocked(state), _) => state.symbol(),
            (Self::Linked | Self::NotPresent, _)
            | (Self::Preview | Self::Declined, Mode::Link) => LinkState::Absent.symbol(),
            (Self::AlreadyLinked | Self::Removed { .. }, _)
            | (Self::Preview | Self::Declined, Mode::Unlink) => LinkState::CorrectSymlink.symbol(),
        }
    }
}

/// Inspect the link location of `spec` and apply `mode` to it.
///
/// # Errors
///
/// Returns an error if inspection or the filesystem mutation fails.
pub fn reconcile(mode: Mode, spec: &LinkSpec, ctx: &Context) -> Result<Outcome, ResourceError> {
    let state = spec.state()?;
    ctx.log.debug(&format!(
        "{}: {}",
        spec.symlink_path.display(),
        state.describe()
    ));
    match mode {
        Mode::Link => symlinks::link(spec, state, ctx),
        Mode::Unlink => symlinks::unlink(spec, state, ctx),
    }
}

/// Reconcile every entry in order, reporting one status line per file.
///
/// Stops at the first fatal error; files already processed stay as they are.
///
/// # Errors
///
/// Returns an error if an entry is invalid or a link cannot be inspected,
/// created or removed.
pub fn reconcile_all(
    mode: Mode,
    entries: &[PathBuf],
    root: &Path,
    ctx: &Context,
) -> Result<Vec<(PathBuf, Outcome)>, DotstributeError> {
    let mut outcomes = Vec::with_capacity(entries.len());
    for entry in entries {
        let spec = resolve(entry, root, &ctx.home)?;
        let outcome = reconcile(mode, &spec, ctx)?;
        report(mode, &spec, &outcome, ctx);
        outcomes.push((entry.clone(), outcome));
    }
    Ok(outcomes)
}

/// Emit the status line for one file and record it for the summary.
fn report(mode: Mode, spec: &LinkSpec, outcome: &Outcome, ctx: &Context) {
    let name = spec.entry.display().to_string();
    let link = spec.symlink_path.display();
    let detail = match outcome {
        Outcome::Linked => format!("linked {link}"),
        Outcome::Removed { pruned: None } => format!("removed {link}"),
        Outcome::Removed { pruned: Some(dir) } => {
            format!("removed {link} and empty {}", dir.display())
        }
        Outcome::AlreadyLinked => "already linked".to_string(),
        Outcome::NotPresent => format!("no symlink at {link}, skipping"),
        Outcome::Preview => match mode {
            Mode::Link => format!("would link {link} -> {}", spec.real_path.display()),
            Mode::Unlink => format!("would remove {link}"),
        },
        Outcome::Declined => "skipped".to_string(),
        Outcome::Blocked(state) => match mode {
            Mode::Link => format!("{}, cannot create symlink at {link}", state.describe()),
            Mode::Unlink => format!("{link} is not a symlink managed by this tool, ignoring"),
        },
    };

    let line = format!("{} {name} - {detail}", outcome.symbol(mode));
    match outcome {
        Outcome::Preview => ctx.log.dry_run(&line),
        Outcome::Blocked(_) => ctx.log.warn(&line),
        _ => ctx.log.info(&line),
    }
    let message = matches!(outcome, Outcome::Blocked(_)).then_some(detail.as_str());
    ctx.log.record_file(&name, outcome.status(), message);
}
