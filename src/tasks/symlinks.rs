//! Per-file link and unlink actions.
use crate::resources::LinkState;
use crate::resources::error::ResourceError;
use crate::resources::symlink::LinkSpec;

use super::{Context, Outcome};

/// Create the symlink described by `spec` if nothing is in the way.
///
/// # Errors
///
/// Returns an error if a parent directory or the symlink cannot be created.
pub fn link(spec: &LinkSpec, state: LinkState, ctx: &Context) -> Result<Outcome, ResourceError> {
    match state {
        LinkState::CorrectSymlink => return Ok(Outcome::AlreadyLinked),
        LinkState::WrongSymlink { .. } | LinkState::OccupiedNonSymlink { .. } => {
            return Ok(Outcome::Blocked(state));
        }
        LinkState::Absent => {}
    }

    if ctx.preview {
        return Ok(Outcome::Preview);
    }
    if !ctx.confirm(&format!(
        "link {} -> {}?",
        spec.symlink_path.display(),
        spec.real_path.display()
    )) {
        return Ok(Outcome::Declined);
    }

    spec.create()?;
    ctx.log.debug(&format!(
        "linked {} -> {}",
        spec.symlink_path.display(),
        spec.real_path.display()
    ));
    Ok(Outcome::Linked)
}

/// Remove the symlink described by `spec` if it is ours, then prune its
/// parent directory when that became empty.
///
/// # Errors
///
/// Returns an error if the link cannot be removed or the parent cannot be
/// listed or removed.
pub fn unlink(spec: &LinkSpec, state: LinkState, ctx: &Context) -> Result<Outcome, ResourceError> {
    match state {
        LinkState::Absent => return Ok(Outcome::NotPresent),
        LinkState::WrongSymlink { .. } | LinkState::OccupiedNonSymlink { .. } => {
            return Ok(Outcome::Blocked(state));
        }
        LinkState::CorrectSymlink => {}
    }

    if ctx.preview {
        return Ok(Outcome::Preview);
    }
    if !ctx.confirm(&format!("remove {}?", spec.symlink_path.display())) {
        return Ok(Outcome::Declined);
    }

    let pruned = spec.remove(&ctx.home)?;
    ctx.log
        .debug(&format!("removed {}", spec.symlink_path.display()));
    if let Some(dir) = &pruned {
        ctx.log
            .debug(&format!("removed empty directory {}", dir.display()));
    }
    Ok(Outcome::Removed { pruned })
}
