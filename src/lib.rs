//! Dotfile symlink distribution.
//!
//! Walks a dotfiles repository and mirrors every file into the home directory
//! as a dot-prefixed symlink (`bashrc` becomes `~/.bashrc`,
//! `config/git/config` becomes `~/.config/git/config`), or removes those
//! symlinks again.  Entries whose name starts with a prefix listed in the
//! repository's `.dotignore` are skipped.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]** resolves the run configuration and the ignore list
//! - **[`walk`]** lists the repository files to manage
//! - **[`resources`]** maps a file to its link and inspects, creates or removes it
//! - **[`tasks`]** reconciles each file according to the run mode
//! - **[`commands`]** wires the above together for the CLI
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod resources;
pub mod tasks;
pub mod walk;
