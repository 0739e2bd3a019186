//! Add command implementation.

use crate::cli::AddArgs;
use crate::error::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct AddOutput {
    id: i64,
    date: String,
    name: String,
    /// Names actually linked, after in-call de-duplication.
    participants: Vec<String>,
}

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the date is invalid or the store rejects the write.
pub fn execute(args: &AddArgs, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = super::open_storage(db_path)?;

    let event = storage.add_event(&args.date, &args.name, &args.participants)?;
    let participants: Vec<String> = storage
        .event_participants(event.id)?
        .into_iter()
        .map(|p| p.name)
        .collect();

    if json {
        let output = AddOutput {
            id: event.id,
            date: event.date,
            name: event.name,
            participants,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("Added event '{}' on {} (id: {})", event.name, event.date, event.id);
    if !participants.is_empty() {
        println!("  Participants: {}", participants.join(", "));
    }
    Ok(())
}
