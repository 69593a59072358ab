//! Configuration management for `ticketdesk`.
//!
//! The database location is resolved from, in order:
//! - `--db` flag (or the `TICKETS_DB` environment variable)
//! - `database:` in a YAML config file (`--config`, else `./tickets.yaml`)
//! - `tickets.db` in the working directory

use crate::error::{Result, TicketError};
use crate::storage::SqliteStorage;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_FILE: &str = "tickets.db";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "tickets.yaml";

/// Environment variable naming the database file.
pub const DB_ENV_VAR: &str = "TICKETS_DB";

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// On-disk YAML config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub database: Option<PathBuf>,
}

impl ConfigFile {
    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve configuration relative to the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config file is missing or unreadable.
    pub fn resolve(cli: &CliOverrides) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve_in(&cwd, cli)
    }

    /// Resolve configuration relative to `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config file is missing or unreadable.
    pub fn resolve_in(base_dir: &Path, cli: &CliOverrides) -> Result<Self> {
        if let Some(db) = &cli.db {
            debug!(path = %db.display(), "Database path from command line");
            return Ok(Self {
                db_path: base_dir.join(db),
            });
        }

        let config_path = match &cli.config {
            Some(path) => {
                let path = base_dir.join(path);
                if !path.is_file() {
                    return Err(TicketError::ConfigNotFound(path));
                }
                Some(path)
            }
            None => Some(base_dir.join(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
        };

        if let Some(config_path) = config_path {
            let file = ConfigFile::load(&config_path)?;
            if let Some(database) = file.database {
                let config_dir = config_path.parent().unwrap_or(base_dir);
                debug!(config = %config_path.display(), "Database path from config file");
                return Ok(Self {
                    db_path: config_dir.join(database),
                });
            }
        }

        Ok(Self {
            db_path: base_dir.join(DEFAULT_DB_FILE),
        })
    }
}

/// Resolve configuration and open the ticket store.
///
/// # Errors
///
/// Returns an error if configuration cannot be resolved or the database
/// cannot be opened.
pub fn open_storage_with_cli(cli: &CliOverrides) -> Result<SqliteStorage> {
    let config = Config::resolve(cli)?;
    open_storage(&config)
}

/// Open the ticket store at the configured path, creating its directory.
///
/// # Errors
///
/// Returns an error if the directory or database cannot be created.
pub fn open_storage(config: &Config) -> Result<SqliteStorage> {
    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    SqliteStorage::open(&config.db_path)
}
