//! SQLite storage layer for evlog.
//!
//! This module provides the persistence layer using SQLite with:
//! - Idempotent schema creation on every open
//! - Transaction discipline for the event + participant write path
//! - Read-side query building for search and stats
//!
//! # Submodules
//!
//! - [`schema`] - Database schema definition
//! - [`sqlite`] - Connection handling and the event repository
//! - [`query`] - Search and statistics queries

pub mod query;
pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStorage;
