//! Data-access operations for customers, restaurants, and reservations.
//!
//! Every operation borrows the store handle explicitly and issues a single
//! parameterized statement. Ids are generated here, never by callers.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::model::{
    validate_customer_name, validate_restaurant_name, Customer, CustomerId, NewReservation,
    Reservation, ReservationId, ReservationView, Restaurant, RestaurantId,
};

use super::connection::Database;

/// Converts a timestamp to Unix epoch milliseconds for storage.
pub(super) fn datetime_to_millis(date: DateTime<Utc>) -> i64 {
    date.timestamp_millis()
}

/// Converts stored Unix epoch milliseconds back to a timestamp.
pub(super) fn millis_to_datetime(idx: usize, millis: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, millis))
}

fn row_to_customer(row: &rusqlite::Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_restaurant(row: &rusqlite::Row<'_>) -> rusqlite::Result<Restaurant> {
    Ok(Restaurant {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Expects: id, `party_count`, `restaurant_id`, `customer_id`, date
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    Ok(Reservation {
        id: row.get(0)?,
        party_count: row.get(1)?,
        restaurant_id: row.get(2)?,
        customer_id: row.get(3)?,
        date: millis_to_datetime(4, row.get(4)?)?,
    })
}

/// Expects the column order of [`SELECT_RESERVATION_VIEWS`].
fn row_to_reservation_view(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReservationView> {
    Ok(ReservationView {
        reservation_id: row.get(0)?,
        party_count: row.get(1)?,
        date: millis_to_datetime(2, row.get(2)?)?,
        customer_id: row.get(3)?,
        customer_name: row.get(4)?,
        restaurant_id: row.get(5)?,
        restaurant_name: row.get(6)?,
    })
}

const INSERT_CUSTOMER: &str = r"
    INSERT INTO customer (id, name)
    VALUES (?1, ?2)
    RETURNING id, name
";

const INSERT_RESTAURANT: &str = r"
    INSERT INTO restaurant (id, name)
    VALUES (?1, ?2)
    RETURNING id, name
";

const SELECT_CUSTOMERS: &str = r"
    SELECT id, name
    FROM customer
    ORDER BY rowid
";

const SELECT_RESTAURANTS: &str = r"
    SELECT id, name
    FROM restaurant
    ORDER BY rowid
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservation (id, party_count, restaurant_id, customer_id, date)
    VALUES (?1, ?2, ?3, ?4, ?5)
    RETURNING id, party_count, restaurant_id, customer_id, date
";

const SELECT_RESERVATION_VIEWS: &str = r"
    SELECT reservation.id,
           reservation.party_count,
           reservation.date,
           customer.id,
           customer.name,
           restaurant.id,
           restaurant.name
    FROM reservation
    INNER JOIN customer ON customer.id = reservation.customer_id
    INNER JOIN restaurant ON restaurant.id = reservation.restaurant_id
    ORDER BY reservation.date DESC
";

const DELETE_RESERVATION: &str = r"
    DELETE FROM reservation
    WHERE id = ?1 AND customer_id = ?2
";

const COUNT_RESERVATIONS: &str = "SELECT COUNT(*) FROM reservation";

impl Database {
    /// Creates a customer with a freshly generated id.
    ///
    /// The stored name is exactly the given name; it is validated but not
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is longer than 100 characters
    /// - The insert fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use booking::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/booking.db")).unwrap();
    /// let ada = Database::create_customer(db.connection(), "Ada").unwrap();
    /// assert_eq!(ada.name, "Ada");
    /// ```
    pub fn create_customer(conn: &Connection, name: &str) -> Result<Customer> {
        let name = validate_customer_name(name)?;
        let customer = conn.query_row(
            INSERT_CUSTOMER,
            params![CustomerId::generate(), name],
            row_to_customer,
        )?;
        log::debug!("created customer {}", customer.id);
        Ok(customer)
    }

    /// Creates a restaurant with a freshly generated id.
    ///
    /// A `None` name is stored as NULL.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is longer than 100 characters or the
    /// insert fails.
    pub fn create_restaurant(conn: &Connection, name: Option<&str>) -> Result<Restaurant> {
        let name = validate_restaurant_name(name)?;
        let restaurant = conn.query_row(
            INSERT_RESTAURANT,
            params![RestaurantId::generate(), name],
            row_to_restaurant,
        )?;
        log::debug!("created restaurant {}", restaurant.id);
        Ok(restaurant)
    }

    /// Lists every customer in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn fetch_customers(conn: &Connection) -> Result<Vec<Customer>> {
        let mut stmt = conn.prepare(SELECT_CUSTOMERS)?;
        let customers = stmt
            .query_map([], row_to_customer)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(customers)
    }

    /// Lists every restaurant in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn fetch_restaurants(conn: &Connection) -> Result<Vec<Restaurant>> {
        let mut stmt = conn.prepare(SELECT_RESTAURANTS)?;
        let restaurants = stmt
            .query_map([], row_to_restaurant)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(restaurants)
    }

    /// Stores a reservation and returns the created row.
    ///
    /// The date was already resolved when the [`NewReservation`] was built,
    /// so an omitted date becomes the time of that call rather than a
    /// schema default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConstraintViolation`] when:
    /// - The customer or restaurant does not exist (`ForeignKey`)
    /// - The customer already holds a reservation at this restaurant
    ///   (`PrimaryKey`)
    ///
    /// Any other failure is returned as [`Error::Storage`]. A failed call
    /// leaves no row behind.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use booking::database::{Database, DatabaseConfig};
    /// use booking::{PartyCount, Reservation};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/booking.db")).unwrap();
    /// let conn = db.connection();
    /// let ada = Database::create_customer(conn, "Ada").unwrap();
    /// let nori = Database::create_restaurant(conn, Some("Nori")).unwrap();
    ///
    /// let request = Reservation::builder(ada.id, nori.id, PartyCount::try_from(2).unwrap()).build();
    /// let reservation = Database::create_reservation(conn, &request).unwrap();
    /// assert_eq!(reservation.customer_id, ada.id);
    /// ```
    pub fn create_reservation(conn: &Connection, request: &NewReservation) -> Result<Reservation> {
        let reservation = conn.query_row(
            INSERT_RESERVATION,
            params![
                ReservationId::generate(),
                request.party_count(),
                request.restaurant_id(),
                request.customer_id(),
                datetime_to_millis(request.date()),
            ],
            row_to_reservation,
        )?;
        log::debug!(
            "created reservation {} for customer {} at restaurant {}",
            reservation.id,
            reservation.customer_id,
            reservation.restaurant_id
        );
        Ok(reservation)
    }

    /// Lists reservations joined with their customer and restaurant, latest
    /// date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn fetch_reservations(conn: &Connection) -> Result<Vec<ReservationView>> {
        let mut stmt = conn.prepare(SELECT_RESERVATION_VIEWS)?;
        let views = stmt
            .query_map([], row_to_reservation_view)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(views)
    }

    /// Deletes a reservation owned by `customer_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFoundOrUnauthorized`] if no reservation has this
    /// id and belongs to this customer, including a repeated delete. Other
    /// failures are returned as storage errors.
    pub fn destroy_reservation(
        conn: &Connection,
        id: &ReservationId,
        customer_id: &CustomerId,
    ) -> Result<()> {
        let rows = conn.execute(DELETE_RESERVATION, params![id, customer_id])?;
        if rows == 0 {
            return Err(Error::NotFoundOrUnauthorized {
                reservation_id: id.to_string(),
                customer_id: customer_id.to_string(),
            });
        }
        log::debug!("deleted reservation {id}");
        Ok(())
    }

    /// Returns the number of stored reservations.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_reservations(conn: &Connection) -> Result<u64> {
        let count: i64 = conn.query_row(COUNT_RESERVATIONS, [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
