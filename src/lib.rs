//! evlog - a local event log.
//!
//! Records dated events and the people who participated in them, and
//! answers keyword or date-prefix searches over that data. Everything
//! lives in a single SQLite database.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (Event, Participant, SearchHit, StatsSummary)
//! - [`storage`] - SQLite database layer (schema, repository, queries)
//! - [`config`] - Database path resolution
//! - [`validate`] - Strict date and argument validation
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod validate;

pub use error::{Error, Result};
