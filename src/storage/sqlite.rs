//! SQLite storage implementation.
//!
//! Owns the connection and implements the event write path: one event
//! row plus a participant fan-out (insert-if-absent, then link), all
//! inside a single transaction so an event and its links appear
//! together or not at all.

use crate::error::Result;
use crate::model::Event;
use crate::validate::{parse_event_date, validate_event_name};
use rusqlite::Connection;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// SQLite-based storage backend.
///
/// Constructed once per process and passed to each operation; tests use
/// [`SqliteStorage::open_memory`] for isolated stores.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open a database at the given path.
    ///
    /// Creates the database and applies the schema if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema fails.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, None)
    }

    /// Open a database with an optional busy timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema fails.
    pub fn open_with_timeout(path: &Path, timeout_ms: Option<u64>) -> Result<Self> {
        let conn = Connection::open(path)?;

        if let Some(timeout) = timeout_ms {
            conn.busy_timeout(Duration::from_millis(timeout))?;
        } else {
            // Default 5 second timeout
            conn.busy_timeout(Duration::from_secs(5))?;
        }

        super::schema::apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        super::schema::apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Get a reference to the underlying connection (for read operations).
    #[must_use]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ==================
    // Event Repository
    // ==================

    /// Record an event with its participants.
    ///
    /// Validates the date before anything is written, then runs the
    /// whole insert sequence in one IMMEDIATE transaction:
    ///
    /// 1. Insert the Event row.
    /// 2. For each participant name, in given order and de-duplicated
    ///    within the call, `INSERT OR IGNORE` into Participants, look
    ///    up its id, and insert the EventParticipants link.
    /// 3. Commit. Any failure rolls the whole unit back.
    ///
    /// Returns the new [`Event`] with its canonical date.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDate`] for a malformed date (no
    /// rows written), [`crate::Error::Integrity`] on a constraint
    /// violation, or [`crate::Error::Database`] for any other storage
    /// failure.
    pub fn add_event(&mut self, date: &str, name: &str, participants: &[String]) -> Result<Event> {
        let date = parse_event_date(date)?;
        validate_event_name(name)?;

        let tx = self
            .conn
            .transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO Events (date, name) VALUES (?1, ?2)",
            rusqlite::params![date, name],
        )?;
        let event_id = tx.last_insert_rowid();

        // First occurrence wins; repeating a name within one call
        // yields a single link.
        let mut seen: HashSet<&str> = HashSet::new();
        for participant in participants {
            if !seen.insert(participant.as_str()) {
                continue;
            }

            tx.execute(
                "INSERT OR IGNORE INTO Participants (name) VALUES (?1)",
                [participant],
            )?;
            let participant_id: i64 = tx.query_row(
                "SELECT id FROM Participants WHERE name = ?1",
                [participant],
                |row| row.get(0),
            )?;
            tx.execute(
                "INSERT INTO EventParticipants (event_id, participant_id) VALUES (?1, ?2)",
                rusqlite::params![event_id, participant_id],
            )?;
        }

        tx.commit()?;

        tracing::debug!(event_id, %date, name, "event recorded");
        Ok(Event {
            id: event_id,
            date,
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn event_count(storage: &SqliteStorage) -> i64 {
        storage
            .conn()
            .query_row("SELECT COUNT(*) FROM Events", [], |row| row.get(0))
            .unwrap()
    }

    fn link_count(storage: &SqliteStorage) -> i64 {
        storage
            .conn()
            .query_row("SELECT COUNT(*) FROM EventParticipants", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_open_memory() {
        let storage = SqliteStorage::open_memory();
        assert!(storage.is_ok());
    }

    #[test]
    fn test_add_event_without_participants() {
        let mut storage = SqliteStorage::open_memory().unwrap();

        let event = storage.add_event("2023-05-15", "Birthday", &[]).unwrap();
        assert!(event.id > 0);
        assert_eq!(event.date, "2023-05-15");
        assert_eq!(event.name, "Birthday");
        assert_eq!(event_count(&storage), 1);
        assert_eq!(link_count(&storage), 0);
    }

    #[test]
    fn test_add_event_links_participants_in_order() {
        let mut storage = SqliteStorage::open_memory().unwrap();

        let event = storage
            .add_event(
                "2023-05-15",
                "Birthday",
                &["Ivan".to_string(), "Maria".to_string()],
            )
            .unwrap();

        let names: Vec<String> = storage
            .conn()
            .prepare(
                "SELECT p.name FROM EventParticipants ep
                 JOIN Participants p ON ep.participant_id = p.id
                 WHERE ep.event_id = ?1 ORDER BY ep.id",
            )
            .unwrap()
            .query_map([event.id], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(names, vec!["Ivan".to_string(), "Maria".to_string()]);
    }

    #[test]
    fn test_participant_reused_across_events() {
        let mut storage = SqliteStorage::open_memory().unwrap();

        storage
            .add_event("2023-05-15", "Birthday", &["Ivan".to_string()])
            .unwrap();
        storage
            .add_event("2023-06-01", "Picnic", &["Ivan".to_string()])
            .unwrap();

        let ivan_rows: i64 = storage
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM Participants WHERE name = 'Ivan'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(ivan_rows, 1);
        assert_eq!(link_count(&storage), 2);
    }

    #[test]
    fn test_duplicate_participant_within_call_links_once() {
        let mut storage = SqliteStorage::open_memory().unwrap();

        storage
            .add_event(
                "2023-05-15",
                "Birthday",
                &["Ivan".to_string(), "Ivan".to_string()],
            )
            .unwrap();
        assert_eq!(link_count(&storage), 1);
    }

    #[test]
    fn test_invalid_date_writes_nothing() {
        let mut storage = SqliteStorage::open_memory().unwrap();

        let before = event_count(&storage);
        let err = storage
            .add_event("2023-13-01", "Bad", &["Ivan".to_string()])
            .expect_err("month 13 must be rejected");
        assert!(matches!(err, Error::InvalidDate { .. }));
        assert_eq!(event_count(&storage), before);

        // Non-canonical forms are rejected too
        assert!(storage.add_event("2023-5-1", "Bad", &[]).is_err());
        assert!(storage.add_event("not-a-date", "Bad", &[]).is_err());
    }

    #[test]
    fn test_failed_link_insert_rolls_back_event() {
        let mut storage = SqliteStorage::open_memory().unwrap();

        // Sabotage the link table so the fan-out fails after the
        // Event insert has already happened inside the transaction.
        storage
            .conn()
            .execute("DROP TABLE EventParticipants", [])
            .unwrap();

        let err = storage
            .add_event("2023-05-15", "Birthday", &["Ivan".to_string()])
            .expect_err("link insert should fail");
        assert!(matches!(err, Error::Database(_)));

        // The whole unit rolled back: no orphaned Event, no Participant
        assert_eq!(event_count(&storage), 0);
        let participant_count: i64 = storage
            .conn()
            .query_row("SELECT COUNT(*) FROM Participants", [], |row| row.get(0))
            .unwrap();
        assert_eq!(participant_count, 0);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut storage = SqliteStorage::open_memory().unwrap();

        let err = storage.add_event("2023-05-15", "  ", &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(event_count(&storage), 0);
    }
}
