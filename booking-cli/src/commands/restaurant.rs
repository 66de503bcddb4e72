//! Restaurant commands: add and list.

use booking::Database;
use clap::{Args, Subcommand};

use crate::error::CliError;
use crate::output::{print_rows, OutputFormat};
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Manage restaurants.
#[derive(Args)]
pub struct RestaurantCommand {
    #[command(subcommand)]
    action: RestaurantAction,
}

#[derive(Subcommand)]
enum RestaurantAction {
    /// Create a restaurant and print its id
    Add {
        /// Restaurant name (optional, at most 100 characters)
        name: Option<String>,
    },

    /// List all restaurants
    List {
        /// Output format [default: from config, else table]
        #[arg(long, value_enum, ignore_case = true)]
        format: Option<OutputFormat>,
    },
}

impl RestaurantCommand {
    /// Execute the restaurant command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        match self.action {
            RestaurantAction::Add { name } => {
                let restaurant = Database::create_restaurant(db.connection(), name.as_deref())?;
                log::info!("created restaurant {}", restaurant.id);
                println!("{}", restaurant.id);
            }
            RestaurantAction::List { format } => {
                let restaurants = Database::fetch_restaurants(db.connection())?;
                let format = format.unwrap_or_else(|| config.output_format().into());
                print_rows(&restaurants, format)?;
            }
        }

        Ok(())
    }
}
