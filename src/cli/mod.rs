//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// evlog - record events and their participants, search by keyword or date
#[derive(Parser, Debug)]
#[command(name = "evlog", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (default: ~/.evlog/events.db)
    #[arg(long, global = true, env = "EVLOG_DB")]
    pub db: Option<PathBuf>,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record an event with its participants
    Add(AddArgs),

    /// Search events by keyword and/or date
    Search(SearchArgs),

    /// Show aggregate statistics
    Stats,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Event date (YYYY-MM-DD)
    pub date: String,

    /// Event name
    pub name: String,

    /// Participant names
    pub participants: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search terms: a term of digits and hyphens filters by date
    /// prefix (e.g. 2023 or 2023-05), anything else is a keyword
    pub terms: Vec<String>,

    /// Date prefix filter (overrides positional classification)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Keyword filter on event or participant names
    #[arg(short, long)]
    pub keyword: Option<String>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
