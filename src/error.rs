//! Error types for `ticketdesk`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for ticket store and command operations.
#[derive(Error, Debug)]
pub enum TicketError {
    // === Ticket Errors ===
    /// Ticket with the specified ID was not found.
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: i64 },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {}", join_errors(.errors))]
    ValidationErrors { errors: Vec<ValidationError> },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file given explicitly but missing.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    // === Storage Errors ===
    /// Any failure reported by SQLite.
    #[error("Database I/O error: {0}")]
    Database(#[from] rusqlite::Error),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML config parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TicketError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }
}

/// Result type using `TicketError`.
pub type Result<T> = std::result::Result<T, TicketError>;
