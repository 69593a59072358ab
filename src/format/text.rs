//! Text formatting functions for `ticketdesk`.
//!
//! Plain, one-line-per-record output:
//! - Ticket list lines
//! - Add/update/delete confirmations

use crate::model::Ticket;

/// Message printed when the store holds no tickets.
pub const NO_TICKETS: &str = "No tickets found.";

/// Format a single-line ticket summary.
///
/// Format: `ID: {id}, Name: {name}, Ticket Number: {ticket_number}, Agent: {agent}`
#[must_use]
pub fn format_ticket_line(ticket: &Ticket) -> String {
    format!(
        "ID: {}, Name: {}, Ticket Number: {}, Agent: {}",
        ticket.id, ticket.name, ticket.ticket_number, ticket.agent,
    )
}

/// Confirmation for a newly added ticket.
#[must_use]
pub fn format_ticket_added(ticket: &Ticket) -> String {
    format!(
        "Ticket added: {} ({}) - Agent: {}",
        ticket.name, ticket.ticket_number, ticket.agent
    )
}

#[must_use]
pub fn format_ticket_updated(id: i64) -> String {
    format!("Ticket {id} updated.")
}

/// Confirmation for a delete; `removed` is false when no row matched.
#[must_use]
pub fn format_ticket_deleted(id: i64, removed: bool) -> String {
    if removed {
        format!("Ticket {id} deleted.")
    } else {
        format!("Ticket {id} not found; nothing deleted.")
    }
}
