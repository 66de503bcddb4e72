//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from the data directory file,
/// environment variables, and programmatic overrides.
///
/// # Examples
///
/// ```
/// use booking::config::{Config, ConfigBuilder, ServerConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         server: Some(ServerConfig { host: None, port: Some(4100) }),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.port(), 4100);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `config.yaml` from this directory instead of the default data
    /// directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(data_dir.as_ref().to_path_buf());
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merges all sources and validates the result.
    ///
    /// Precedence, lowest to highest: defaults, `{data_dir}/config.yaml`,
    /// `BOOKING_*` environment variables, programmatic overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data directory cannot be resolved
    /// - The configuration file cannot be read or parsed
    /// - An environment variable holds an invalid value
    /// - The merged configuration fails validation
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let data_dir = match self.data_dir {
                Some(dir) => dir,
                None => crate::database::resolve_data_dir()?,
            };
            if let Some(source) = ConfigLoader::load_data_dir_config(&data_dir)? {
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{OutputFormat, ServerConfig};
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_is_read_from_data_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.yaml"), "output_format: csv\n").unwrap();

        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.output_format(), OutputFormat::Csv);
    }

    #[test]
    #[serial]
    fn test_precedence_programmatic_env_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.yaml"),
            "server:\n  host: 10.1.1.1\n  port: 3100\noutput_format: csv\n",
        )
        .unwrap();
        std::env::set_var("BOOKING_PORT", "3200");
        std::env::remove_var("PORT");

        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .with_config(Config {
                output_format: Some(OutputFormat::Json),
                ..Default::default()
            })
            .build();
        std::env::remove_var("BOOKING_PORT");
        let config = config.unwrap();

        assert_eq!(config.host(), "10.1.1.1");
        assert_eq!(config.port(), 3200);
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                server: Some(ServerConfig {
                    host: Some(String::new()),
                    port: None,
                }),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }
}
