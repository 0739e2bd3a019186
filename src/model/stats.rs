//! Aggregate statistics over the event log.

use serde::{Deserialize, Serialize};

/// The participant who attended the most distinct events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopParticipant {
    pub name: String,
    /// Number of distinct events attended.
    pub events: i64,
}

/// Summary counts reported by `evlog stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    pub events: i64,
    pub participants: i64,
    /// Event-participant link rows.
    pub attendances: i64,
    /// Most frequent participant, ties broken by name. `None` when
    /// no participant has been recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_participant: Option<TopParticipant>,
    /// Earliest event date on record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_date: Option<String>,
    /// Latest event date on record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<String>,
}

impl StatsSummary {
    /// Returns true if the log contains no events at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events == 0
    }
}
