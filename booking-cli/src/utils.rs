//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, and database
//! management.

use std::path::PathBuf;
use std::time::Duration;

use booking::database::default_data_dir;
use booking::{Config, ConfigBuilder, Database, DatabaseConfig};
use chrono::{DateTime, Utc};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in milliseconds).
    pub busy_timeout: Option<u64>,

    /// Fail instead of creating a missing database.
    pub disable_autoinit: bool,
}

/// Resolve the data directory: `--data-dir` / `BOOKING_DATA_DIR`, else
/// `~/.booking`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. `{data_dir}/config.yaml`
/// 3. Built-in defaults
///
/// Command-line flags are applied on top by each command.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .map_err(|e| match e {
            booking::Error::Io(io) => CliError::Io(io),
            other => CliError::Config(other.to_string()),
        })
}

/// Open the database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    Database::open(database_config(global, config)?).map_err(CliError::from)
}

/// Open the database and discard its contents, whatever schema version
/// it carries.
///
/// # Errors
///
/// Same as [`open_database`], plus any failure of the reset itself.
pub fn reset_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    Database::open_for_reset(database_config(global, config)?).map_err(CliError::from)
}

fn database_config(global: &GlobalOptions, config: &Config) -> Result<DatabaseConfig, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let db_config = DatabaseConfig::in_data_dir(&data_dir);

    if !db_config.path.exists() && global.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let timeout = global
        .busy_timeout
        .map_or_else(|| config.busy_timeout(), Duration::from_millis);

    Ok(db_config.with_busy_timeout(timeout))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
