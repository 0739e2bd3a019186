//! Configuration management.
//!
//! evlog keeps a single global database; every command resolves the
//! same path unless overridden.
//!
//! Resolution priority:
//! 1. `--db <path>` CLI flag
//! 2. `EVLOG_DB` environment variable
//! 3. Global location: `~/.evlog/events.db`

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Get the global evlog directory location (`~/.evlog`).
#[must_use]
pub fn global_evlog_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".evlog"))
}

/// Resolve the database path.
///
/// # Errors
///
/// Returns a config error if no home directory can be determined and
/// no explicit path or environment override is set.
pub fn resolve_db_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    // Priority 1: Explicit path from CLI flag
    if let Some(path) = explicit_path {
        return Ok(path.to_path_buf());
    }

    // Priority 2: EVLOG_DB environment variable
    if let Ok(db_path) = std::env::var("EVLOG_DB") {
        if !db_path.trim().is_empty() {
            return Ok(PathBuf::from(db_path));
        }
    }

    // Priority 3: Global database location
    global_evlog_dir()
        .map(|dir| dir.join("events.db"))
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

/// Create the parent directory of the database path if missing.
///
/// The store itself creates the file and schema on first open.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
