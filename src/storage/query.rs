//! Search and statistics queries.
//!
//! The read side of the store: filtered, grouped views over the three
//! tables. Queries are single-shot; each call re-executes against the
//! current state and materializes the full result set.

use crate::error::Result;
use crate::model::{Participant, SearchHit, StatsSummary, TopParticipant};
use crate::storage::SqliteStorage;
use rusqlite::OptionalExtension;

impl SqliteStorage {
    /// Search events by keyword and/or date prefix.
    ///
    /// Produces one row per event with its participant names joined by
    /// ", " in link-insertion order. A keyword matches events whose
    /// name contains it OR that have at least one participant whose
    /// name contains it (store-default `LIKE` case rules). A date
    /// filters by string prefix, so "2023" or "2023-05" work as year
    /// and year-month queries. Both filters combine conjunctively;
    /// with neither, all events are returned.
    ///
    /// Results are ordered ascending by date (lexicographic on the ISO
    /// 8601 string, which is chronological order).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search(&self, keyword: Option<&str>, date: Option<&str>) -> Result<Vec<SearchHit>> {
        let mut sql = String::from(
            "SELECT e.date, e.name, GROUP_CONCAT(p.name, ', ' ORDER BY ep.id) AS participants
             FROM Events e
             LEFT JOIN EventParticipants ep ON e.id = ep.event_id
             LEFT JOIN Participants p ON ep.participant_id = p.id",
        );

        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(keyword) = keyword {
            conditions.push("(e.name LIKE ? OR p.name LIKE ?)");
            params.push(format!("%{keyword}%"));
            params.push(format!("%{keyword}%"));
        }
        if let Some(date) = date {
            conditions.push("e.date LIKE ?");
            params.push(format!("{date}%"));
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        sql.push_str(" GROUP BY e.id ORDER BY e.date, e.id");

        let mut stmt = self.conn().prepare(&sql)?;
        let hits = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), |row| {
                Ok(SearchHit {
                    date: row.get(0)?,
                    name: row.get(1)?,
                    participants: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(hits)
    }

    /// List the participants linked to an event, in link-insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn event_participants(&self, event_id: i64) -> Result<Vec<Participant>> {
        let mut stmt = self.conn().prepare(
            "SELECT p.id, p.name
             FROM EventParticipants ep
             JOIN Participants p ON ep.participant_id = p.id
             WHERE ep.event_id = ?1
             ORDER BY ep.id",
        )?;
        let participants = stmt
            .query_map([event_id], |row| {
                Ok(Participant {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(participants)
    }

    /// Aggregate counts over the event log.
    ///
    /// Reports total events, total participants, total attendance
    /// links, the most frequent participant (distinct events attended,
    /// ties broken by name), and the date range on record.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn stats(&self) -> Result<StatsSummary> {
        let conn = self.conn();

        let events: i64 = conn.query_row("SELECT COUNT(*) FROM Events", [], |row| row.get(0))?;
        let participants: i64 =
            conn.query_row("SELECT COUNT(*) FROM Participants", [], |row| row.get(0))?;
        let attendances: i64 =
            conn.query_row("SELECT COUNT(*) FROM EventParticipants", [], |row| row.get(0))?;

        let top_participant = conn
            .query_row(
                "SELECT p.name, COUNT(DISTINCT ep.event_id) AS attended
                 FROM Participants p
                 JOIN EventParticipants ep ON ep.participant_id = p.id
                 GROUP BY p.id
                 ORDER BY attended DESC, p.name ASC
                 LIMIT 1",
                [],
                |row| {
                    Ok(TopParticipant {
                        name: row.get(0)?,
                        events: row.get(1)?,
                    })
                },
            )
            .optional()?;

        let (first_date, last_date) = conn.query_row(
            "SELECT MIN(date), MAX(date) FROM Events",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(StatsSummary {
            events,
            participants,
            attendances,
            top_participant,
            first_date,
            last_date,
        })
    }
}
