//! Logging infrastructure for structured console and file output.

mod logger;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{FileEntry, FileStatus, Log};

/// In-memory [`Log`] implementation that records every message, so tests can
/// assert on what the reconciliation code reported.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingLog {
    messages: std::sync::Mutex<Vec<(&'static str, String)>>,
    files: std::sync::Mutex<Vec<FileEntry>>,
}

#[cfg(test)]
impl RecordingLog {
    fn push(&self, level: &'static str, msg: &str) {
        if let Ok(mut guard) = self.messages.lock() {
            guard.push((level, msg.to_string()));
        }
    }

    /// All messages logged at `level` (`"info"`, `"warn"`, `"dry_run"`, ...).
    pub(crate) fn messages(&self, level: &str) -> Vec<String> {
        self.messages.lock().map_or_else(
            |_| vec![],
            |g| {
                g.iter()
                    .filter(|(l, _)| *l == level)
                    .map(|(_, m)| m.clone())
                    .collect()
            },
        )
    }

    /// All recorded file entries.
    pub(crate) fn files(&self) -> Vec<FileEntry> {
        self.files.lock().map_or_else(|_| vec![], |g| g.clone())
    }
}

#[cfg(test)]
impl Log for RecordingLog {
    fn stage(&self, msg: &str) {
        self.push("stage", msg);
    }
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }
    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }
    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }
    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
    fn dry_run(&self, msg: &str) {
        self.push("dry_run", msg);
    }
    fn record_file(&self, name: &str, status: FileStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.files.lock() {
            guard.push(FileEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }
}
