//! Data types for events, participants, and query results.

mod event;
mod stats;

pub use event::{Event, Participant, SearchHit};
pub use stats::{StatsSummary, TopParticipant};
