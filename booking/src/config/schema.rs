//! Configuration schema definitions.
//!
//! This module defines the configuration structure for booking: the HTTP
//! listen address, database settings, and the default listing format.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default listen host for `booking serve`.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port for `booking serve`.
pub const DEFAULT_PORT: u16 = 3000;

/// Default `SQLite` busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; the accessors
/// fill in defaults.
///
/// # Examples
///
/// ```
/// use booking::config::{Config, ServerConfig};
///
/// let config = Config {
///     server: Some(ServerConfig {
///         host: None,
///         port: Some(8080),
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.port(), 8080);
/// assert_eq!(config.host(), "127.0.0.1");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server settings.
    pub server: Option<ServerConfig>,

    /// Database settings.
    pub database: Option<DatabaseSettings>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the configured listen host or the default.
    #[must_use]
    pub fn host(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
    }

    /// Returns the configured listen port or the default.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(DEFAULT_PORT)
    }

    /// Returns the configured busy timeout or the default.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(
            self.database
                .as_ref()
                .and_then(|d| d.busy_timeout_ms)
                .unwrap_or(DEFAULT_BUSY_TIMEOUT_MS),
        )
    }

    /// Returns the configured list output format or the default (table).
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or(OutputFormat::Table)
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host or IP address to bind.
    pub host: Option<String>,

    /// TCP port to bind.
    pub port: Option<u16>,
}

/// Database settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    /// How long to wait on a locked database, in milliseconds.
    pub busy_timeout_ms: Option<u64>,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use booking::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// Human-readable table format.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.busy_timeout(), Duration::from_millis(5000));
        assert_eq!(config.output_format(), OutputFormat::Table);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r"
server:
  host: 0.0.0.0
  port: 8080
database:
  busy_timeout_ms: 250
output_format: json
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.busy_timeout(), Duration::from_millis(250));
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "server:\n  hots: localhost\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("tsv".parse::<OutputFormat>().is_err());
    }
}
