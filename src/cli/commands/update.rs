//! Update command implementation.

use crate::cli::UpdateArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::format_ticket_updated;
use crate::model::TicketUpdate;
use tracing::{debug, info};

/// Execute the update-ticket command.
///
/// # Errors
///
/// Returns `TicketNotFound` if the id does not exist, a validation error if
/// a supplied field is empty, or a database error.
pub fn execute(args: UpdateArgs, json: bool, cli: &CliOverrides) -> Result<()> {
    let id = args.id;
    let update = TicketUpdate {
        name: args.name,
        ticket_number: args.ticket_number,
        agent: args.agent,
    };
    if update.is_empty() {
        debug!(id, "No fields supplied; checking the ticket exists only");
    }

    let storage = config::open_storage_with_cli(cli)?;
    let ticket = storage.update_ticket(id, &update)?;
    storage.close()?;
    info!(id, "Updated ticket");

    if json {
        println!("{}", serde_json::to_string_pretty(&ticket)?);
    } else {
        println!("{}", format_ticket_updated(id));
    }

    Ok(())
}
