//! Link or unlink pass over the whole repository.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::config::ignore::IgnoreList;
use crate::logging::Log;
use crate::prompt::Prompt;
use crate::tasks::{self, Context, Mode, Outcome};
use crate::walk::walk;

/// Link or unlink every file of the repository described by `config`.
///
/// Loads the ignore list, walks the repository, then reconciles each file in
/// walk order.  Returns the outcome of every processed file.
///
/// # Errors
///
/// Returns an error if the ignore file or the repository cannot be read, or
/// a link cannot be inspected, created or removed.
pub fn run(
    config: &Config,
    log: &Arc<dyn Log>,
    prompt: Arc<dyn Prompt>,
) -> Result<Vec<(PathBuf, Outcome)>> {
    log.stage("Loading ignore list");
    let ignore = IgnoreList::load(&config.ignore_file, config.unreadable_ignore, log.as_ref())?;

    log.stage("Scanning repository");
    let entries = walk(&config.root, &ignore)?;
    log.info(&format!(
        "{} files in {}",
        entries.len(),
        config.root.display()
    ));

    let action = match config.mode {
        Mode::Link => "Linking dotfiles",
        Mode::Unlink => "Removing symlinks",
    };
    if config.preview {
        log.stage(&format!("{action} (preview)"));
    } else {
        log.stage(action);
    }

    let ctx = Context::new(config, Arc::clone(log), prompt);
    let outcomes = tasks::reconcile_all(config.mode, &entries, &config.root, &ctx)?;
    Ok(outcomes)
}
