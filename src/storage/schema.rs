//! Database schema definition.
//!
//! The three-table layout (`Events`, `Participants`, `EventParticipants`)
//! is the on-disk compatibility contract; table and column names must not
//! change.

use rusqlite::{Connection, Result};

/// The complete SQL schema for the evlog database.
///
/// Dates are stored as ISO 8601 `TEXT` so that lexicographic order is
/// chronological order and `LIKE 'prefix%'` gives year / year-month
/// filtering.
pub const SCHEMA_SQL: &str = r"
-- Events: dated, named occurrences
CREATE TABLE IF NOT EXISTS Events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    name TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_events_date ON Events(date);

-- Participants: unique by name, created on first mention
CREATE TABLE IF NOT EXISTS Participants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

-- EventParticipants: one row per attendance
CREATE TABLE IF NOT EXISTS EventParticipants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    event_id INTEGER NOT NULL,
    participant_id INTEGER NOT NULL,
    FOREIGN KEY (event_id) REFERENCES Events(id),
    FOREIGN KEY (participant_id) REFERENCES Participants(id)
);

CREATE INDEX IF NOT EXISTS idx_event_participants_event ON EventParticipants(event_id);
CREATE INDEX IF NOT EXISTS idx_event_participants_participant ON EventParticipants(participant_id);
";

/// Apply the schema to the database.
///
/// This uses `execute_batch` to run the entire DDL script.
/// It is idempotent because all statements use `IF NOT EXISTS`,
/// and non-destructive of existing data; safe on every process start.
///
/// # Errors
///
/// Returns an error if the SQL execution fails or pragmas cannot be set.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    // Set pragmas before schema creation
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    conn.execute_batch(SCHEMA_SQL)?;

    Ok(())
}
