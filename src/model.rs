//! Core data types for `ticketdesk`.

use serde::{Deserialize, Serialize};

/// A persisted support ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Store-assigned identifier. Never reused.
    pub id: i64,
    pub name: String,
    pub ticket_number: String,
    /// Agent the ticket is assigned to.
    pub agent: String,
}

/// Fields for a ticket that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTicket {
    pub name: String,
    pub ticket_number: String,
    pub agent: String,
}

impl NewTicket {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ticket_number: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ticket_number: ticket_number.into(),
            agent: agent.into(),
        }
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketUpdate {
    pub name: Option<String>,
    pub ticket_number: Option<String>,
    pub agent: Option<String>,
}

impl TicketUpdate {
    /// True when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.ticket_number.is_none() && self.agent.is_none()
    }
}
