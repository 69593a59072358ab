//! `SQLite` storage layer for `ticketdesk`.
//!
//! One table, one connection per command. Every open applies the schema, so
//! a fresh database file is usable immediately.
//!
//! # Submodules
//!
//! - [`schema`] - Table definition
//! - [`sqlite`] - Ticket store operations

pub mod schema;
pub mod sqlite;

pub use schema::SCHEMA;
pub use sqlite::SqliteStorage;
