//! Utility functions for log path resolution, ANSI stripping, and time formatting.
use std::fs;
use std::path::{Path, PathBuf};

/// Strip ANSI escape sequences from a string.
///
/// Handles SGR sequences (ending in `m`) and other CSI sequences (ending
/// in any letter in the `@`..`~` range).
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if let Some(next) = chars.next()
                && next == '['
            {
                for inner in chars.by_ref() {
                    if ('@'..='~').contains(&inner) {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Pick the cache base directory from the raw environment values.
///
/// `XDG_CACHE_HOME` wins; otherwise `<home>/.cache`, falling back to `.`.
fn cache_base(xdg_cache_home: Option<&str>, home: Option<&str>) -> PathBuf {
    xdg_cache_home.map_or_else(
        || home.map_or_else(|| PathBuf::from("."), PathBuf::from).join(".cache"),
        PathBuf::from,
    )
}

/// Return the `$XDG_CACHE_HOME/dotstribute/` directory, creating it if needed.
pub(super) fn cache_dir() -> Option<PathBuf> {
    let xdg = std::env::var("XDG_CACHE_HOME").ok();
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok();
    let dir = cache_base(xdg.as_deref(), home.as_deref()).join("dotstribute");
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Return the log file path for `command` inside `dir`.
pub(super) fn log_file_in(dir: &Path, command: &str) -> PathBuf {
    dir.join(format!("{command}.log"))
}

/// Return the log file path under `$XDG_CACHE_HOME/dotstribute/` (or `~/.cache/dotstribute/`).
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    Some(log_file_in(&cache_dir()?, command))
}

/// Format the current UTC time as `YYYY-MM-DD HH:MM:SS`.
pub(super) fn format_utc_datetime() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format the current UTC time as `HH:MM:SS`.
pub(super) fn format_utc_time() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}
