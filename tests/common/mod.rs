// Shared helpers for integration tests.
//
// Provides a temporary repository and home directory pair plus a fluent
// builder so each integration test can set up an isolated environment
// without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use clap::Parser;
use dotstribute::cli::Cli;
use dotstribute::commands::distribute;
use dotstribute::config::Config;
use dotstribute::logging::{FileStatus, Log, Logger};
use dotstribute::prompt::Prompt;
use dotstribute::tasks::Outcome;

/// [`Prompt`] that gives the same answer every time and counts questions.
#[derive(Debug, Default)]
pub struct FixedPrompt {
    answer: bool,
    asked: AtomicUsize,
}

impl FixedPrompt {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    /// Number of questions asked so far.
    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Prompt for FixedPrompt {
    fn confirm(&self, _question: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// An isolated dotfiles repository and home directory, both backed by
/// [`tempfile::TempDir`] and deleted when dropped.
pub struct TestEnv {
    pub repo: tempfile::TempDir,
    pub home: tempfile::TempDir,
}

/// Result of one [`TestEnv::run`] call.
pub struct RunResult {
    pub outcomes: anyhow::Result<Vec<(PathBuf, Outcome)>>,
    pub log: Arc<Logger>,
}

impl RunResult {
    /// Outcomes of a run that is expected to succeed.
    pub fn unwrap(self) -> Vec<(PathBuf, Outcome)> {
        self.outcomes.expect("run should succeed")
    }

    /// Number of files recorded with `status`.
    pub fn count(&self, status: FileStatus) -> usize {
        self.log.count(status)
    }
}

impl TestEnv {
    /// Create an empty repository and home directory.
    pub fn new() -> Self {
        Self {
            repo: tempfile::tempdir().expect("create repo dir"),
            home: tempfile::tempdir().expect("create home dir"),
        }
    }

    /// Canonical repository root.
    pub fn root(&self) -> PathBuf {
        dunce::canonicalize(self.repo.path()).expect("canonicalize repo")
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Build the run configuration for the given CLI flags.
    pub fn config(&self, args: &[&str]) -> Config {
        let mut argv = vec!["dotstribute"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).expect("parse args");
        Config::new(self.root(), self.home().to_path_buf(), &cli)
    }

    /// Run a link or unlink pass with the given flags and prompt.
    pub fn run_with(&self, args: &[&str], prompt: Arc<dyn Prompt>) -> RunResult {
        let config = self.config(args);
        let log = Arc::new(Logger::new("test"));
        let shared = Arc::clone(&log) as Arc<dyn Log>;
        let outcomes = distribute::run(&config, &shared, prompt);
        RunResult { outcomes, log }
    }

    /// Run without confirmation prompts.
    pub fn run(&self, args: &[&str]) -> RunResult {
        self.run_with(args, Arc::new(FixedPrompt::new(false)))
    }

    /// Raw target of the symlink at `~/<rel>`, if it is one.
    pub fn link_target(&self, rel: &str) -> Option<PathBuf> {
        std::fs::read_link(self.home().join(rel)).ok()
    }

    /// Whether anything, even a dangling symlink, exists at `~/<rel>`.
    pub fn exists_in_home(&self, rel: &str) -> bool {
        self.home().join(rel).symlink_metadata().is_ok()
    }

    /// Sorted listing of everything under the home directory, relative and
    /// `/`-separated, with symlinks marked `@`.
    pub fn home_listing(&self) -> String {
        let mut lines: Vec<String> = walkdir::WalkDir::new(self.home())
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|e| {
                let e = e.expect("walk home");
                let rel = e
                    .path()
                    .strip_prefix(self.home())
                    .expect("under home")
                    .to_string_lossy()
                    .replace('\\', "/");
                if e.path_is_symlink() {
                    format!("{rel}@")
                } else if e.file_type().is_dir() {
                    format!("{rel}/")
                } else {
                    rel
                }
            })
            .collect();
        lines.sort();
        lines.join("\n")
    }
}

/// Fluent builder for [`TestEnv`].
pub struct TestEnvBuilder {
    env: TestEnv,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            env: TestEnv::new(),
        }
    }

    /// Write `content` to `<repo>/<rel>`, creating parent directories.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.env.repo.path().join(rel), content);
        self
    }

    /// Write the `.dotignore` file.
    pub fn with_ignore(self, content: &str) -> Self {
        self.with_file(".dotignore", content)
    }

    /// Write `content` to `<home>/<rel>`, creating parent directories.
    pub fn with_home_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.env.home.path().join(rel), content);
        self
    }

    pub fn build(self) -> TestEnv {
        self.env
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write file");
}
