//! Serve command implementation.
//!
//! Runs the HTTP API on a tokio runtime until interrupted.

use booking::config::{ConfigMerger, ConfigValidator, ServerConfig};
use booking::Config;
use clap::Args;

use crate::error::CliError;
use crate::server::{self, AppState};
use crate::utils::{load_configuration, open_database, reset_database, GlobalOptions};

/// Run the HTTP API server.
#[derive(Args)]
pub struct ServeCommand {
    /// Host or IP address to listen on [default: 127.0.0.1]
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Port to listen on [default: 3000, or $PORT]
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Drop and recreate every table before serving
    #[arg(long)]
    reset: bool,
}

impl ServeCommand {
    /// Execute the serve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = self.effective_config(load_configuration(global)?)?;

        let db = if self.reset {
            let db = reset_database(global, &config)?;
            if !global.quiet {
                eprintln!("Database reset");
            }
            db
        } else {
            open_database(global, &config)?
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async {
            let listener = server::bind(config.host(), config.port()).await?;
            if !global.quiet {
                eprintln!("Server listening on {}", listener.local_addr()?);
            }
            server::run(listener, AppState::new(db)).await
        })?;

        Ok(())
    }

    /// Layers `--host`/`--port` over the loaded configuration.
    fn effective_config(&self, mut config: Config) -> Result<Config, CliError> {
        let overrides = Config {
            server: Some(ServerConfig {
                host: self.host.clone(),
                port: self.port,
            }),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut config, &overrides);
        ConfigValidator::validate(&config).map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        Ok(config)
    }
}
