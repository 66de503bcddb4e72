//! Demo command implementation.

use booking::operations::run_demo;
use clap::Args;

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, GlobalOptions};

/// Exercise every operation once: add a customer and a restaurant, list
/// them, book a party of four, then cancel it.
#[derive(Args)]
pub struct DemoCommand {}

impl DemoCommand {
    /// Execute the demo command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let report = run_demo(db.connection())?;

        println!(
            "Customer created: {} ({})",
            report.customer.name, report.customer.id
        );
        println!(
            "Restaurant created: {} ({})",
            report.restaurant.name.as_deref().unwrap_or("-"),
            report.restaurant.id
        );
        println!("Fetched customers: {}", report.customers.len());
        println!("Fetched restaurants: {}", report.restaurants.len());
        println!(
            "Reservation created: {} (party of {} on {})",
            report.reservation.id,
            report.reservation.party_count,
            format_timestamp(report.reservation.date)
        );
        println!("Reservation destroyed");

        Ok(())
    }
}
