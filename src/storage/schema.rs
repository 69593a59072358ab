//! Database schema for the ticket store.

/// Schema applied on every open. `AUTOINCREMENT` keeps ids from being reused
/// after a delete.
pub const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS tickets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    ticket_number TEXT NOT NULL,
    agent TEXT NOT NULL
);
";
