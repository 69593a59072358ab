//! Logging setup for `ticketdesk`.
//!
//! Diagnostics go to stderr (or a log file) so stdout carries only command
//! output.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Error returned when the global subscriber cannot be installed.
pub type LoggingError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Map verbosity flags to a default filter directive.
#[must_use]
pub const fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` is honored unless `-v` or `-q` was given.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) -> Result<(), LoggingError> {
    let directive = level_directive(verbose, quiet);
    let filter = if verbose == 0 && !quiet {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    } else {
        EnvFilter::new(directive)
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    }
}
