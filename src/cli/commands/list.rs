//! List command implementation.

use crate::cli::ListArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::{NO_TICKETS, format_ticket_line};

/// Execute the list-tickets command.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the query fails.
pub fn execute(_args: &ListArgs, json: bool, cli: &CliOverrides) -> Result<()> {
    let storage = config::open_storage_with_cli(cli)?;
    let tickets = storage.list_tickets()?;
    storage.close()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tickets)?);
    } else if tickets.is_empty() {
        println!("{NO_TICKETS}");
    } else {
        for ticket in &tickets {
            println!("{}", format_ticket_line(ticket));
        }
    }

    Ok(())
}
