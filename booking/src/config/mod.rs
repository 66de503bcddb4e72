//! Configuration system for booking.
//!
//! This module provides layered configuration with support for:
//! - A YAML file at `{data_dir}/config.yaml`
//! - Environment variable overrides (`BOOKING_*`, plus `PORT`)
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables
//! 3. `{data_dir}/config.yaml`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use booking::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir("/var/lib/booking")
//!     .build()
//!     .unwrap();
//!
//! println!("listening on {}:{}", config.host(), config.port());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{
    Config, DatabaseSettings, OutputFormat, ServerConfig, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_HOST,
    DEFAULT_PORT,
};
pub use validator::ConfigValidator;
