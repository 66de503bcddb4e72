//! List command implementation.
//!
//! This module implements the `list` command, which displays reservations
//! joined with their customer and restaurant, latest date first.

use booking::Database;
use clap::Args;

use crate::error::CliError;
use crate::output::{print_rows, OutputFormat};
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format [default: from config, else table]
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let views = Database::fetch_reservations(db.connection())?;

        let format = self
            .format
            .unwrap_or_else(|| config.output_format().into());
        print_rows(&views, format)
    }
}
