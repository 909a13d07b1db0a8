//! Core logging types: per-file entries, status, and the [`Log`] trait.

/// Reconciliation result of a single repository file, for summary reporting.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Repository-relative path of the file.
    pub name: String,
    /// Summary bucket the outcome falls into.
    pub status: FileStatus,
    /// Optional detail message (e.g., why the file was blocked).
    pub message: Option<String>,
}

/// Summary bucket for a reconciled file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// A link was created or removed.
    Changed,
    /// Nothing to do: already linked, or nothing to unlink.
    Unchanged,
    /// Preview mode; the intended action was only reported.
    Preview,
    /// The operator declined the confirmation prompt.
    Declined,
    /// The target location is occupied by something this tool does not manage.
    Blocked,
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) is the production implementation; the
/// reconciliation code only sees this trait so tests can substitute a
/// recording implementation.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a preview (dry-run) action message.
    fn dry_run(&self, msg: &str);
    /// Record a file result for the summary.
    fn record_file(&self, name: &str, status: FileStatus, message: Option<&str>);
}
