//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `BOOKING_*` environment variables that
//! override configuration file values. The bare `PORT` variable is honored
//! too, below `BOOKING_PORT`.

use std::env;

use crate::config::schema::{Config, DatabaseSettings, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use booking::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric port).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_server_overrides(config)?;

        // BOOKING_BUSY_TIMEOUT_MS
        if let Ok(value) = env::var("BOOKING_BUSY_TIMEOUT_MS") {
            let timeout = value.parse().map_err(|_| Error::Validation {
                field: "BOOKING_BUSY_TIMEOUT_MS".into(),
                message: "Must be a non-negative integer".into(),
            })?;
            config
                .database
                .get_or_insert_with(DatabaseSettings::default)
                .busy_timeout_ms = Some(timeout);
        }

        // BOOKING_OUTPUT_FORMAT
        if let Ok(value) = env::var("BOOKING_OUTPUT_FORMAT") {
            let format: OutputFormat = value.parse().map_err(|message| Error::Validation {
                field: "BOOKING_OUTPUT_FORMAT".into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        Ok(())
    }

    /// Apply listen address overrides.
    fn apply_server_overrides(config: &mut Config) -> Result<()> {
        let mut server = config.server.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(host) = env::var("BOOKING_HOST") {
            server.host = Some(host);
            modified = true;
        }

        let port_var = ["BOOKING_PORT", "PORT"]
            .into_iter()
            .find_map(|name| env::var(name).ok().map(|value| (name, value)));
        if let Some((name, value)) = port_var {
            server.port = Some(Self::parse_port(name, &value)?);
            modified = true;
        }

        if modified {
            config.server = Some(server);
        }

        Ok(())
    }

    fn parse_port(field: &str, s: &str) -> Result<u16> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Invalid port number: '{s}'"),
        })
    }
}
