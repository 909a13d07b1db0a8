//! Shared filesystem helpers for resource operations.
pub mod fs;
