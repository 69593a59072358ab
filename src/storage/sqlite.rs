//! `SQLite` ticket store.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use crate::error::{Result, TicketError};
use crate::model::{NewTicket, Ticket, TicketUpdate};
use crate::storage::schema::SCHEMA;
use crate::validation::TicketValidator;

const SELECT_COLUMNS: &str = "id, name, ticket_number, agent";

/// SQLite-backed ticket store.
///
/// Owns a single connection for the lifetime of one command. The connection
/// is released when the store is dropped or [`SqliteStorage::close`]d.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (creating if needed) the database at `path` and apply the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the schema cannot be applied.
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Opening ticket database");
        let conn = Connection::open(path)?;
        let storage = Self { conn };
        storage.initialize()?;
        Ok(storage)
    }

    /// Open a private in-memory database with the schema applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be applied.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Self { conn };
        storage.initialize()?;
        Ok(storage)
    }

    /// Ensure the ticket table exists. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema statement fails.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        info!("Database setup complete.");
        Ok(())
    }

    /// Insert a ticket and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if any field is empty, or a database error.
    pub fn create_ticket(&self, ticket: &NewTicket) -> Result<i64> {
        TicketValidator::validate_new(ticket).map_err(TicketError::from_validation_errors)?;

        self.conn.execute(
            "INSERT INTO tickets (name, ticket_number, agent) VALUES (?1, ?2, ?3)",
            params![ticket.name, ticket.ticket_number, ticket.agent],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "Inserted ticket");
        Ok(id)
    }

    /// All tickets in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_tickets(&self) -> Result<Vec<Ticket>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {SELECT_COLUMNS} FROM tickets ORDER BY id"))?;
        let rows = stmt.query_map([], ticket_from_row)?;
        let mut tickets = Vec::new();
        for row in rows {
            tickets.push(row?);
        }
        Ok(tickets)
    }

    /// Fetch one ticket by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_ticket(&self, id: i64) -> Result<Option<Ticket>> {
        let ticket = self
            .conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM tickets WHERE id = ?1"),
                params![id],
                ticket_from_row,
            )
            .optional()?;
        Ok(ticket)
    }

    /// Number of stored tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_tickets(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM tickets", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Update the supplied fields of a ticket and return the stored result.
    ///
    /// Unsupplied fields keep their values. An update with no fields still
    /// requires the ticket to exist.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if no ticket has this id, `Validation` if a
    /// supplied field is empty, or a database error.
    pub fn update_ticket(&self, id: i64, update: &TicketUpdate) -> Result<Ticket> {
        TicketValidator::validate_update(update).map_err(TicketError::from_validation_errors)?;

        let updated = self
            .conn
            .query_row(
                &format!(
                    "UPDATE tickets SET
                        name = COALESCE(?1, name),
                        ticket_number = COALESCE(?2, ticket_number),
                        agent = COALESCE(?3, agent)
                     WHERE id = ?4
                     RETURNING {SELECT_COLUMNS}"
                ),
                params![update.name, update.ticket_number, update.agent, id],
                ticket_from_row,
            )
            .optional()?;

        let ticket = updated.ok_or(TicketError::TicketNotFound { id })?;
        debug!(id, "Updated ticket");
        Ok(ticket)
    }

    /// Delete a ticket. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn delete_ticket(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM tickets WHERE id = ?1", params![id])?;
        debug!(id, removed, "Deleted ticket");
        Ok(removed > 0)
    }

    /// Close the connection, reporting any error SQLite raises on close.
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite fails to finalize the connection.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_conn, err)| TicketError::from(err))
    }
}

fn ticket_from_row(row: &Row<'_>) -> rusqlite::Result<Ticket> {
    Ok(Ticket {
        id: row.get(0)?,
        name: row.get(1)?,
        ticket_number: row.get(2)?,
        agent: row.get(3)?,
    })
}
