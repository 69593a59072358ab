//! Command-line interface for `ticketdesk`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{CliOverrides, DB_ENV_VAR};
use crate::logging;

/// `ticketdesk` (tk) - Support ticket tracker.
#[derive(Parser, Debug)]
#[command(name = "tk")]
#[command(
    author,
    version,
    about = "Support ticket tracker (SQLite)",
    long_about = None,
    after_help = "Each command opens the database, runs one statement, and exits."
)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = DB_ENV_VAR, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Path to a YAML config file (default: ./tickets.yaml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Storage-related overrides taken from global flags.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            db: self.db.clone(),
            config: self.config.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new ticket
    AddTicket(AddArgs),

    /// List all tickets
    ListTickets(ListArgs),

    /// Update an existing ticket
    UpdateTicket(UpdateArgs),

    /// Delete a ticket
    DeleteTicket(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct AddArgs {
    /// Ticket name
    pub name: String,

    /// Ticket number
    pub ticket_number: String,

    /// Assigned agent
    pub agent: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {}

#[derive(Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    /// Ticket ID
    pub id: i64,

    /// New name for the ticket
    #[arg(long)]
    pub name: Option<String>,

    /// New ticket number for the ticket
    #[arg(long, alias = "ticket_number")]
    pub ticket_number: Option<String>,

    /// New agent for the ticket
    #[arg(long)]
    pub agent: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeleteArgs {
    /// Ticket ID
    pub id: i64,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if logging cannot be set up or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let overrides = cli.overrides();
    let json = cli.json;

    match cli.command {
        Some(Commands::AddTicket(args)) => commands::add::execute(args, json, &overrides)?,
        Some(Commands::ListTickets(args)) => commands::list::execute(&args, json, &overrides)?,
        Some(Commands::UpdateTicket(args)) => commands::update::execute(args, json, &overrides)?,
        Some(Commands::DeleteTicket(args)) => commands::delete::execute(&args, json, &overrides)?,
        Some(Commands::Completions(args)) => commands::completions::execute(&args),
        None => println!("tk - support ticket tracker. Use --help for usage."),
    }

    Ok(())
}
