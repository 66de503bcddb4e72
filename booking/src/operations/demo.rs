//! Startup smoke run exercising every data-access operation once.

use rusqlite::Connection;

use crate::error::Result;
use crate::model::{Customer, PartyCount, Reservation, Restaurant};
use crate::Database;

/// Name of the customer created by [`run_demo`].
pub const DEMO_CUSTOMER_NAME: &str = "John Doe";

/// Name of the restaurant created by [`run_demo`].
pub const DEMO_RESTAURANT_NAME: &str = "Fine Diner";

/// Party size booked by [`run_demo`].
pub const DEMO_PARTY_COUNT: u32 = 4;

/// Everything the demo created or read, in the order it happened.
#[derive(Debug)]
pub struct DemoReport {
    /// The customer created first.
    pub customer: Customer,
    /// The restaurant created second.
    pub restaurant: Restaurant,
    /// All customers after both creates.
    pub customers: Vec<Customer>,
    /// All restaurants after both creates.
    pub restaurants: Vec<Restaurant>,
    /// The reservation that was created and then cancelled.
    pub reservation: Reservation,
}

/// Creates a customer and a restaurant, lists both, books a party of four,
/// then cancels the booking.
///
/// The customer and restaurant stay behind; the reservation does not.
///
/// # Errors
///
/// Returns the first error raised by any step.
pub fn run_demo(conn: &Connection) -> Result<DemoReport> {
    let customer = Database::create_customer(conn, DEMO_CUSTOMER_NAME)?;
    log::info!("customer created: {} ({})", customer.name, customer.id);

    let restaurant = Database::create_restaurant(conn, Some(DEMO_RESTAURANT_NAME))?;
    log::info!("restaurant created: {DEMO_RESTAURANT_NAME} ({})", restaurant.id);

    let customers = Database::fetch_customers(conn)?;
    log::info!("fetched {} customers", customers.len());

    let restaurants = Database::fetch_restaurants(conn)?;
    log::info!("fetched {} restaurants", restaurants.len());

    let party_count = PartyCount::try_from(i64::from(DEMO_PARTY_COUNT))?;
    let request = Reservation::builder(customer.id, restaurant.id, party_count).build();
    let reservation = Database::create_reservation(conn, &request)?;
    log::info!("reservation created: {}", reservation.id);

    Database::destroy_reservation(conn, &reservation.id, &customer.id)?;
    log::info!("reservation destroyed: {}", reservation.id);

    Ok(DemoReport {
        customer,
        restaurant,
        customers,
        restaurants,
        reservation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;

    #[test]
    fn test_demo_leaves_entities_but_no_reservation() {
        let db = create_test_database();
        let conn = db.connection();

        let report = run_demo(conn).unwrap();

        assert_eq!(report.customer.name, DEMO_CUSTOMER_NAME);
        assert_eq!(report.restaurant.name.as_deref(), Some(DEMO_RESTAURANT_NAME));
        assert_eq!(report.reservation.party_count.value(), DEMO_PARTY_COUNT);
        assert!(report.customers.contains(&report.customer));
        assert!(report.restaurants.contains(&report.restaurant));
        assert_eq!(Database::count_reservations(conn).unwrap(), 0);
    }

    #[test]
    fn test_demo_can_run_repeatedly() {
        let db = create_test_database();
        let conn = db.connection();

        run_demo(conn).unwrap();
        let second = run_demo(conn).unwrap();

        assert_eq!(second.customers.len(), 2);
        assert_eq!(second.restaurants.len(), 2);
    }
}
