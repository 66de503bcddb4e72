//! Reserve command implementation.

use booking::{CustomerId, Database, PartyCount, Reservation, RestaurantId};
use chrono::{DateTime, Utc};
use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Book a party for a customer at a restaurant.
#[derive(Args)]
pub struct ReserveCommand {
    /// Customer id
    #[arg(long, value_name = "ID")]
    customer: CustomerId,

    /// Restaurant id
    #[arg(long, value_name = "ID")]
    restaurant: RestaurantId,

    /// Number of guests
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    party_count: i64,

    /// When the party arrives, RFC 3339 (defaults to now)
    #[arg(long, value_name = "DATETIME")]
    date: Option<DateTime<Utc>>,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let party_count = PartyCount::try_from(self.party_count)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let request = Reservation::builder(self.customer, self.restaurant, party_count)
            .date(self.date)
            .build();
        let reservation = Database::create_reservation(db.connection(), &request)?;

        log::info!(
            "reserved {} for {} at {}",
            reservation.id,
            reservation.customer_id,
            reservation.restaurant_id
        );
        println!("{}", reservation.id);

        Ok(())
    }
}
