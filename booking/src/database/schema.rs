//! Database schema definitions and SQL constants.
//!
//! Three tables make up the store: `restaurant`, `customer`, and
//! `reservation`, the last referencing both of the others. A `metadata`
//! table records the schema version.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Drops every entity table, children before parents.
pub const DROP_TABLES: &str = r"
    DROP TABLE IF EXISTS reservation;
    DROP TABLE IF EXISTS customer;
    DROP TABLE IF EXISTS restaurant;
";

/// SQL statement to create the restaurant table.
pub const CREATE_RESTAURANT_TABLE: &str = r"
    CREATE TABLE restaurant (
        id TEXT PRIMARY KEY NOT NULL,
        name VARCHAR(100)
    )";

/// SQL statement to create the customer table.
pub const CREATE_CUSTOMER_TABLE: &str = r"
    CREATE TABLE customer (
        id TEXT PRIMARY KEY NOT NULL,
        name VARCHAR(100) NOT NULL
    )";

/// SQL statement to create the reservation table.
///
/// The primary key is `(restaurant_id, customer_id)`, so a customer can hold
/// only one reservation per restaurant whatever the date. `date` holds Unix
/// epoch milliseconds; callers always supply it, the default only covers
/// rows written by other tools.
pub const CREATE_RESERVATION_TABLE: &str = r"
    CREATE TABLE reservation (
        id TEXT NOT NULL UNIQUE,
        party_count INTEGER NOT NULL CHECK (party_count > 0),
        restaurant_id TEXT NOT NULL REFERENCES restaurant(id),
        customer_id TEXT NOT NULL REFERENCES customer(id),
        date INTEGER NOT NULL
            DEFAULT (CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER)),
        PRIMARY KEY (restaurant_id, customer_id)
    )";

/// Index backing the `ORDER BY date DESC` listing.
pub const CREATE_RESERVATION_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservation_date ON reservation(date)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
