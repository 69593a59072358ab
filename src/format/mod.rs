//! Output formatting for `ticketdesk`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! Tickets serialize directly; [`DeleteResult`] reports delete outcomes.

mod output;
mod text;

pub use output::DeleteResult;
pub use text::{
    NO_TICKETS, format_ticket_added, format_ticket_deleted, format_ticket_line,
    format_ticket_updated,
};
