//! Event and participant records.

use serde::{Deserialize, Serialize};

/// A dated, named occurrence. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Rowid assigned by the store.
    pub id: i64,
    /// ISO 8601 calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub name: String,
}

/// A named individual associated with one or more events.
///
/// Participants are created lazily on first mention and unique by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub name: String,
}

/// One search result row: an event plus its joined participant names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub date: String,
    pub name: String,
    /// ", "-joined participant names in link-insertion order.
    /// `None` when the event has no participants.
    pub participants: Option<String>,
}

impl SearchHit {
    /// Participant list for display, with the "none" sentinel for
    /// events without participants.
    #[must_use]
    pub fn participants_display(&self) -> &str {
        self.participants.as_deref().unwrap_or("none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participants_display_sentinel() {
        let hit = SearchHit {
            date: "2023-05-15".to_string(),
            name: "Birthday".to_string(),
            participants: None,
        };
        assert_eq!(hit.participants_display(), "none");

        let hit = SearchHit {
            participants: Some("Ivan, Maria".to_string()),
            ..hit
        };
        assert_eq!(hit.participants_display(), "Ivan, Maria");
    }
}
