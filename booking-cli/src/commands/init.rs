//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the booking data directory and database.

use std::path::PathBuf;

use booking::config::CONFIG_FILE_NAME;
use booking::database::DATABASE_FILE_NAME;
use booking::operations::init::{init_database, InitOptions};
use clap::Args;

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};

/// Initialize the booking data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Reset an existing database, discarding every row
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Priority: command flag > global flag > default
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => resolve_data_dir(global)?,
        };

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize booking in: {}", data_dir.display());

            if data_dir.exists() {
                println!("  - Data directory already exists: {}", data_dir.display());
            } else {
                println!("  - Create data directory: {}", data_dir.display());
            }

            let db_path = data_dir.join(DATABASE_FILE_NAME);
            if db_path.exists() {
                if self.overwrite {
                    println!("  - Reset existing database: {}", db_path.display());
                } else {
                    println!(
                        "  - ERROR: Database already exists (use --overwrite to reset): {}",
                        db_path.display()
                    );
                }
            } else {
                println!("  - Create database: {}", db_path.display());
            }

            if self.with_config {
                let config_path = data_dir.join(CONFIG_FILE_NAME);
                if config_path.exists() {
                    println!(
                        "  - Configuration file already exists (will not overwrite): {}",
                        config_path.display()
                    );
                } else {
                    println!("  - Create configuration file: {}", config_path.display());
                }
            }

            return Ok(());
        }

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);

        let result = init_database(&options)?;

        if global.quiet {
            return Ok(());
        }

        println!("Initialized booking in: {}", result.data_dir.display());
        if result.data_dir_created {
            println!("  - Created data directory");
        }
        if result.database_reset {
            println!("  - Reset database");
        } else {
            println!("  - Created database");
        }
        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
