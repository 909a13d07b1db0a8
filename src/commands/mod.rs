//! Top-level command orchestration.
pub mod distribute;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::Cli;
use crate::config::Config;
use crate::logging::{Log, Logger};
use crate::prompt::StdinPrompt;

/// Run whatever the parsed command line asks for.
///
/// # Errors
///
/// Returns an error if configuration cannot be resolved, the ignore file or
/// repository cannot be read, or a link cannot be inspected, created or
/// removed.
pub fn run(cli: &Cli, log: &Arc<Logger>) -> Result<()> {
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "dotstribute", &mut io::stdout());
        return Ok(());
    }

    let version = option_env!("DOTSTRIBUTE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.debug(&format!("dotstribute {version}"));

    if cli.generate {
        log.warn("generating an ignore file is not implemented");
        return Ok(());
    }

    let config = Config::from_cli(cli)?;
    let shared = Arc::clone(log) as Arc<dyn Log>;
    distribute::run(&config, &shared, Arc::new(StdinPrompt))?;
    log.print_summary();
    Ok(())
}

/// Render a fatal error as the single line printed before exiting.
///
/// Every error in the chain already embeds its source in its own message, so
/// only the outermost one is shown.
#[must_use]
pub fn failure_message(err: &anyhow::Error) -> String {
    err.to_string()
}
