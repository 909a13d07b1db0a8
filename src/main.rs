//! `dotstribute` command-line entry point.
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use dotstribute::cli::Cli;
use dotstribute::commands;
use dotstribute::logging::{Logger, init_subscriber};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let cli = Cli::parse();
    init_subscriber(cli.verbose, cli.command_name());
    let log = Arc::new(Logger::new(cli.command_name()));

    match commands::run(&cli, &log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&commands::failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
