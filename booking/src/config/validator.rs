//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use booking::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty host or a zero busy timeout.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref server) = config.server {
            if let Some(ref host) = server.host {
                if host.trim().is_empty() {
                    return Err(Error::Validation {
                        field: "server.host".into(),
                        message: "Host cannot be empty".into(),
                    });
                }
            }
        }

        if let Some(ref database) = config.database {
            if database.busy_timeout_ms == Some(0) {
                return Err(Error::Validation {
                    field: "database.busy_timeout_ms".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }
}
