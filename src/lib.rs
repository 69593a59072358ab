//! `ticketdesk` - Support ticket tracker library
//!
//! This crate provides the core functionality for the `tk` CLI tool:
//! tickets (name, ticket number, assigned agent) kept in a local `SQLite`
//! file, one connection per command.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (Ticket, NewTicket, TicketUpdate)
//! - [`storage`] - `SQLite` ticket store
//! - [`config`] - Database location resolution
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//! - [`validation`] - Required-field checks

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod storage;
pub mod validation;

pub use cli::run;
pub use error::{Result, TicketError};
pub use model::{NewTicket, Ticket, TicketUpdate};
pub use storage::SqliteStorage;
