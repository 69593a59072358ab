//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::config::{self, CliOverrides};
use crate::error::Result;
use crate::format::{DeleteResult, format_ticket_deleted};
use tracing::warn;

/// Execute the delete-ticket command. A missing id is not an error.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the delete fails.
pub fn execute(args: &DeleteArgs, json: bool, cli: &CliOverrides) -> Result<()> {
    let storage = config::open_storage_with_cli(cli)?;
    let deleted = storage.delete_ticket(args.id)?;
    storage.close()?;

    if !deleted {
        warn!(id = args.id, "No ticket with this id; nothing deleted");
    }

    if json {
        let result = DeleteResult {
            id: args.id,
            deleted,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", format_ticket_deleted(args.id, deleted));
    }

    Ok(())
}
