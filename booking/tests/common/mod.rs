//! Common test utilities for integration tests.

pub mod database;

use booking::{Customer, Database, PartyCount, Restaurant};
use rusqlite::Connection;

/// Shorthand for a valid party count.
#[allow(dead_code)]
pub fn party(count: i64) -> PartyCount {
    PartyCount::try_from(count).unwrap()
}

/// Creates the customer "Ada" and the restaurant "Nori".
#[allow(dead_code)]
pub fn ada_and_nori(conn: &Connection) -> (Customer, Restaurant) {
    let ada = Database::create_customer(conn, "Ada").unwrap();
    let nori = Database::create_restaurant(conn, Some("Nori")).unwrap();
    (ada, nori)
}
