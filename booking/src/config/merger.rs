//! Configuration merging and precedence handling.

use crate::config::schema::{Config, DatabaseSettings, ServerConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use booking::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Csv), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configurations given from lowest to highest precedence.
    #[must_use]
    pub fn merge<'a>(sources: impl IntoIterator<Item = &'a Config>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, source);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Simple fields are overwritten when the source sets them; nested
    /// sections are merged field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(ref source_server) = source.server {
            target.server = Some(match &target.server {
                Some(target_server) => Self::merge_server(target_server, source_server),
                None => source_server.clone(),
            });
        }

        if let Some(ref source_database) = source.database {
            target.database = Some(match &target.database {
                Some(target_database) => Self::merge_database(target_database, source_database),
                None => source_database.clone(),
            });
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }

    fn merge_server(target: &ServerConfig, source: &ServerConfig) -> ServerConfig {
        ServerConfig {
            host: source.host.clone().or_else(|| target.host.clone()),
            port: source.port.or(target.port),
        }
    }

    fn merge_database(target: &DatabaseSettings, source: &DatabaseSettings) -> DatabaseSettings {
        DatabaseSettings {
            busy_timeout_ms: source.busy_timeout_ms.or(target.busy_timeout_ms),
        }
    }
}
