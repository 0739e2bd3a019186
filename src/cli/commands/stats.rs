//! Stats command implementation.

use crate::error::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or a query fails.
pub fn execute(db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let storage = super::open_storage(db_path)?;
    let stats = storage.stats()?;

    if json {
        println!("{}", serde_json::to_string(&stats)?);
        return Ok(());
    }

    if stats.is_empty() {
        println!("No events recorded yet.");
        return Ok(());
    }

    println!("{}", "Event log statistics".bold());
    println!("  Events:       {}", stats.events);
    println!("  Participants: {}", stats.participants);
    println!("  Attendances:  {}", stats.attendances);
    if let (Some(first), Some(last)) = (&stats.first_date, &stats.last_date) {
        println!("  Date range:   {first} .. {last}");
    }
    if let Some(top) = &stats.top_participant {
        println!(
            "  Most frequent participant: {} ({} events)",
            top.name, top.events
        );
    }
    Ok(())
}
