//! Command implementations.

pub mod add;
pub mod completions;
pub mod search;
pub mod stats;

use crate::config::{ensure_parent_dir, resolve_db_path};
use crate::error::Result;
use crate::storage::SqliteStorage;
use std::path::PathBuf;

/// Open the store at the resolved database path.
fn open_storage(db_path: Option<&PathBuf>) -> Result<SqliteStorage> {
    let db_path = resolve_db_path(db_path.map(PathBuf::as_path))?;
    ensure_parent_dir(&db_path)?;
    SqliteStorage::open(&db_path)
}
