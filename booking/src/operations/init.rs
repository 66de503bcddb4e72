//! Data directory and database initialization.
//!
//! This module provides functionality for explicitly initializing the
//! booking data directory and database, with optional configuration file
//! creation.

use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;
use crate::database::DATABASE_FILE_NAME;
use crate::error::{Error, Result};
use crate::{Database, DatabaseConfig};

/// Options for database initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Reset an existing database, discarding its rows.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to reset an existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create the default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// Result of initialization operation.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether an existing database was reset.
    pub database_reset: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Default configuration template, every setting commented out.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r"# Booking configuration file
# Environment variables (BOOKING_HOST, BOOKING_PORT, PORT,
# BOOKING_BUSY_TIMEOUT_MS, BOOKING_OUTPUT_FORMAT) take precedence.

# HTTP listen address for `booking serve`
# server:
#   host: 127.0.0.1
#   port: 3000

# SQLite lock wait in milliseconds
# database:
#   busy_timeout_ms: 5000

# Default format for list commands: table, json, or csv
# output_format: table
";

/// Initializes the booking data directory and database.
///
/// A fresh directory gets an empty schema. An existing database is left
/// alone unless `overwrite` is set, in which case every table is dropped
/// and recreated.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database cannot be opened or reset
/// - The configuration file cannot be written
/// - Overwrite is false and the database already exists
///
/// # Examples
///
/// ```no_run
/// use booking::operations::init::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/booking-test"))
///     .with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// println!("config created: {}", result.config_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_reset: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Use --overwrite to reset it.",
                db_path.display()
            ),
        });
    }

    let config = DatabaseConfig::new(&db_path);
    if db_exists {
        Database::open_for_reset(config)?;
        result.database_reset = true;
    } else {
        Database::open(config)?;
    }

    if options.create_config {
        let config_path = options.data_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    log::info!("initialized booking in {}", options.data_dir.display());
    Ok(result)
}
