//! Validation helpers for `ticketdesk`.
//!
//! These routines enforce the required-field rules for tickets and return
//! structured validation errors without touching storage.

use crate::error::ValidationError;
use crate::model::{NewTicket, TicketUpdate};

/// Validates ticket fields.
pub struct TicketValidator;

impl TicketValidator {
    /// Validate a ticket about to be created and return all errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` naming every empty field.
    pub fn validate_new(ticket: &NewTicket) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        check_required(&mut errors, "name", &ticket.name);
        check_required(&mut errors, "ticket_number", &ticket.ticket_number);
        check_required(&mut errors, "agent", &ticket.agent);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate the supplied fields of a partial update.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` naming every supplied field that is empty.
    pub fn validate_update(update: &TicketUpdate) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(name) = update.name.as_deref() {
            check_required(&mut errors, "name", name);
        }
        if let Some(ticket_number) = update.ticket_number.as_deref() {
            check_required(&mut errors, "ticket_number", ticket_number);
        }
        if let Some(agent) = update.agent.as_deref() {
            check_required(&mut errors, "agent", agent);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_required(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, "cannot be empty"));
    }
}
