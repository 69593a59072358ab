//! Command implementations.
//!
//! Each command opens its own storage connection, runs one statement and
//! releases the connection before printing.

pub mod add;
pub mod completions;
pub mod delete;
pub mod list;
pub mod update;
