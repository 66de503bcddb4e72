//! Customer commands: add and list.

use booking::Database;
use clap::{Args, Subcommand};

use crate::error::CliError;
use crate::output::{print_rows, OutputFormat};
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Manage customers.
#[derive(Args)]
pub struct CustomerCommand {
    #[command(subcommand)]
    action: CustomerAction,
}

#[derive(Subcommand)]
enum CustomerAction {
    /// Create a customer and print its id
    Add {
        /// Customer name (at most 100 characters)
        name: String,
    },

    /// List all customers
    List {
        /// Output format [default: from config, else table]
        #[arg(long, value_enum, ignore_case = true)]
        format: Option<OutputFormat>,
    },
}

impl CustomerCommand {
    /// Execute the customer command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        match self.action {
            CustomerAction::Add { name } => {
                let customer = Database::create_customer(db.connection(), &name)?;
                log::info!("created customer {} ({})", customer.name, customer.id);
                println!("{}", customer.id);
            }
            CustomerAction::List { format } => {
                let customers = Database::fetch_customers(db.connection())?;
                let format = format.unwrap_or_else(|| config.output_format().into());
                print_rows(&customers, format)?;
            }
        }

        Ok(())
    }
}
