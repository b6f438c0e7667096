//! Command implementations.

pub mod check;
pub mod env;
pub mod setup;

use std::path::PathBuf;

/// Resolve a possibly-relative CLI path against the current directory.
pub(crate) fn resolve_path(dir: &str) -> PathBuf {
    let p = PathBuf::from(dir);
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}
