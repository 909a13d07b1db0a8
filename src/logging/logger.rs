//! Structured logger with preview awareness and summary collection.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{FileEntry, FileStatus, Log};
use super::utils::log_file_path;

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger with preview awareness and summary collection.
///
/// Messages become [`tracing`] events; the subscriber installed by
/// [`init_subscriber`](super::subscriber::init_subscriber) renders them on
/// the console and appends them to
/// `$XDG_CACHE_HOME/dotstribute/<command>.log`.
#[derive(Debug)]
pub struct Logger {
    files: Mutex<Vec<FileEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger.
    ///
    /// Stores the log file path for display in the run summary; the file
    /// itself is written by the subscriber's file layer.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            files: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Return a clone of all recorded file entries.
    #[must_use]
    pub fn file_entries(&self) -> Vec<FileEntry> {
        self.files.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a preview action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Record a file result for the summary.
    pub fn record_file(&self, name: &str, status: FileStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.files.lock() {
            guard.push(FileEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Count the recorded files with the given status.
    #[must_use]
    pub fn count(&self, status: FileStatus) -> usize {
        self.files
            .lock()
            .map_or(0, |guard| guard.iter().filter(|f| f.status == status).count())
    }

    /// Print the per-run summary of all recorded files.
    pub fn print_summary(&self) {
        let files = self.file_entries();
        if files.is_empty() {
            self.info("no dotfiles found");
            return;
        }

        self.stage("Summary");
        for line in blocked_lines(&files) {
            self.info(&line);
        }
        self.info(&summary_line(&files));

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

/// One red line per blocked file, with the reason it was left alone.
fn blocked_lines(files: &[FileEntry]) -> Vec<String> {
    files
        .iter()
        .filter(|f| f.status == FileStatus::Blocked)
        .map(|f| {
            let suffix = f
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));
            format!("\x1b[31m✗ {}{suffix}\x1b[0m", f.name)
        })
        .collect()
}

/// Render the one-line tally of file statuses.
fn summary_line(files: &[FileEntry]) -> String {
    let count = |status: FileStatus| files.iter().filter(|f| f.status == status).count();
    format!(
        "{} files: \x1b[32m{} changed\x1b[0m, \x1b[2m{} unchanged\x1b[0m, \x1b[37m{} preview\x1b[0m, \x1b[33m{} declined\x1b[0m, \x1b[31m{} blocked\x1b[0m",
        files.len(),
        count(FileStatus::Changed),
        count(FileStatus::Unchanged),
        count(FileStatus::Preview),
        count(FileStatus::Declined),
        count(FileStatus::Blocked),
    )
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_file(&self, name: &str, status: FileStatus, message: Option<&str>) {
        self.record_file(name, status, message);
    }
}
