//! Command-line interface definition.
use std::path::PathBuf;

use clap::Parser;

/// Symlink the dotfiles repository in the current directory into `$HOME`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dotstribute",
    about = "Make your dotfiles easier to manage",
    version = option_env!("DOTSTRIBUTE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Generate an ignore file (not implemented)
    #[arg(short, long)]
    pub generate: bool,

    /// Show what would be linked or removed without changing anything
    #[arg(short, long)]
    pub preview: bool,

    /// Remove managed symlinks instead of creating them
    #[arg(short, long)]
    pub unlink: bool,

    /// Ask for confirmation before each change
    #[arg(short, long)]
    pub ask: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Dotfiles repository root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Ignore list location, relative to the repository root unless absolute
    #[arg(long, value_name = "PATH", default_value = ".dotignore")]
    pub ignore_file: PathBuf,

    /// Fail instead of warning when the ignore file cannot be read
    #[arg(long)]
    pub strict_ignore: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Name used for the log file of this invocation.
    #[must_use]
    pub const fn command_name(&self) -> &'static str {
        if self.unlink { "unlink" } else { "link" }
    }
}
