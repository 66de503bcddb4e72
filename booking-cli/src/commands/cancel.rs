//! Cancel command implementation.

use booking::{CustomerId, Database, ReservationId};
use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Cancel a reservation held by a customer.
#[derive(Args)]
pub struct CancelCommand {
    /// Customer who holds the reservation
    #[arg(long, value_name = "ID")]
    customer: CustomerId,

    /// Reservation to cancel
    #[arg(value_name = "RESERVATION_ID")]
    reservation: ReservationId,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        Database::destroy_reservation(db.connection(), &self.reservation, &self.customer)?;

        if !global.quiet {
            eprintln!("Cancelled reservation {}", self.reservation);
        }
        Ok(())
    }
}
