//! Database layer for customers, restaurants, and reservations.
//!
//! This module provides a SQLite-based store: connection management, schema
//! versioning and reset, and the data-access operations.
//!
//! # Examples
//!
//! ```no_run
//! use booking::database::{Database, DatabaseConfig};
//! use booking::{PartyCount, Reservation};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/booking.db")).unwrap();
//! let conn = db.connection();
//!
//! let ada = Database::create_customer(conn, "Ada").unwrap();
//! let nori = Database::create_restaurant(conn, Some("Nori")).unwrap();
//! let request = Reservation::builder(ada.id, nori.id, PartyCount::try_from(2).unwrap()).build();
//! Database::create_reservation(conn, &request).unwrap();
//!
//! for view in Database::fetch_reservations(conn).unwrap() {
//!     println!("{} at {:?}", view.customer_name, view.restaurant_name);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
