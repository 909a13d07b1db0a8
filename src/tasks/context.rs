use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::logging::Log;
use crate::prompt::Prompt;

/// Shared context for reconciling repository files.
pub struct Context {
    /// Home directory links are created under; never removed.
    pub home: PathBuf,
    /// Report intended actions without touching the filesystem.
    pub preview: bool,
    /// Confirm every change through [`Context::prompt`].
    pub ask: bool,
    /// Logger for status lines and summary recording.
    pub log: Arc<dyn Log>,
    /// Confirmation capability (stdin in production, mocked in tests).
    pub prompt: Arc<dyn Prompt>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("home", &self.home)
            .field("preview", &self.preview)
            .field("ask", &self.ask)
            .field("log", &"<dyn Log>")
            .field("prompt", &"<dyn Prompt>")
            .finish()
    }
}

impl Context {
    /// Creates a context from the run configuration.
    #[must_use]
    pub fn new(config: &Config, log: Arc<dyn Log>, prompt: Arc<dyn Prompt>) -> Self {
        Self {
            home: config.home.clone(),
            preview: config.preview,
            ask: config.ask,
            log,
            prompt,
        }
    }

    /// Ask for confirmation when `ask` is set; always `true` otherwise.
    #[must_use]
    pub fn confirm(&self, question: &str) -> bool {
        !self.ask || self.prompt.confirm(question)
    }
}
