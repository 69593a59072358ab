//! Add command implementation.

use crate::cli::AddArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::format_ticket_added;
use crate::model::{NewTicket, Ticket};
use tracing::info;

/// Execute the add-ticket command.
///
/// # Errors
///
/// Returns an error if a field is empty, the database cannot be opened, or
/// the insert fails.
pub fn execute(args: AddArgs, json: bool, cli: &CliOverrides) -> Result<()> {
    let new_ticket = NewTicket::new(args.name, args.ticket_number, args.agent);

    let storage = config::open_storage_with_cli(cli)?;
    let id = storage.create_ticket(&new_ticket)?;
    storage.close()?;

    let ticket = Ticket {
        id,
        name: new_ticket.name,
        ticket_number: new_ticket.ticket_number,
        agent: new_ticket.agent,
    };
    info!(id, "Created ticket");

    if json {
        println!("{}", serde_json::to_string_pretty(&ticket)?);
    } else {
        println!("{}", format_ticket_added(&ticket));
    }

    Ok(())
}
