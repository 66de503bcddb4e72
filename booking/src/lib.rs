#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # booking
//!
//! A library for storing restaurant reservations.
//!
//! Customers and restaurants are created independently; a reservation books
//! a party for a customer at a restaurant. Reservations can be listed joined
//! with both parents and cancelled by the customer who holds them.
//!
//! ## Core Types
//!
//! - [`Database`] and [`DatabaseConfig`]: the `SQLite` store and its
//!   data-access operations
//! - [`Customer`], [`Restaurant`], [`Reservation`], [`ReservationView`]:
//!   stored records
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use booking::{Database, DatabaseConfig, PartyCount, Reservation};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/booking.db")).unwrap();
//! let conn = db.connection();
//!
//! let ada = Database::create_customer(conn, "Ada").unwrap();
//! let nori = Database::create_restaurant(conn, Some("Nori")).unwrap();
//! let request = Reservation::builder(ada.id, nori.id, PartyCount::try_from(2).unwrap()).build();
//! let reservation = Database::create_reservation(conn, &request).unwrap();
//!
//! Database::destroy_reservation(conn, &reservation.id, &ada.id).unwrap();
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod model;
pub mod operations;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{ConstraintKind, Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use model::{
    Customer, CustomerId, NewReservation, PartyCount, Reservation, ReservationId,
    ReservationView, Restaurant, RestaurantId,
};
