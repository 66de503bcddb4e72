//! Database schema management and migrations.
//!
//! This module handles schema initialization, version checking, and the
//! destructive reset used to start from an empty store.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_CUSTOMER_TABLE, CREATE_METADATA_TABLE, CREATE_RESERVATION_DATE_INDEX,
    CREATE_RESERVATION_TABLE, CREATE_RESTAURANT_TABLE, CURRENT_SCHEMA_VERSION, DROP_TABLES,
    INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Drops and recreates every table, discarding all stored data.
///
/// Tables are dropped children first (`reservation`, `customer`,
/// `restaurant`) and recreated parents first, so foreign keys are satisfied
/// at every step. The whole reset runs in one transaction. Calling this
/// repeatedly always succeeds; it must never be pointed at a store whose
/// contents matter.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use booking::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(DROP_TABLES)?;
    tx.execute(CREATE_METADATA_TABLE, [])?;
    tx.execute(CREATE_RESTAURANT_TABLE, [])?;
    tx.execute(CREATE_CUSTOMER_TABLE, [])?;
    tx.execute(CREATE_RESERVATION_TABLE, [])?;
    tx.execute(CREATE_RESERVATION_DATE_INDEX, [])?;
    tx.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    tx.commit()?;
    log::debug!("schema reset to version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than
/// "no rows returned" or "no such table" (which indicate version 0).
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(rusqlite::Error::SqliteFailure(ref sqlite_err, _))
            if sqlite_err.code == rusqlite::ErrorCode::Unknown =>
        {
            // metadata table doesn't exist yet
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Checks schema compatibility and initializes a fresh store.
///
/// - Version 0 (never initialized): the schema is created
/// - Current version: nothing happens, existing data is kept
/// - Older or newer version: a validation error is returned
///
/// # Errors
///
/// Returns an error if the version is incompatible or a query fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        log::info!("initializing empty database");
        initialize_schema(conn)?;
    } else if version < CURRENT_SCHEMA_VERSION {
        return Err(Error::Validation {
            field: "schema_version".into(),
            message: format!(
                "Database schema version {version} is older than client version {CURRENT_SCHEMA_VERSION}. Run `booking init --overwrite` to reset it."
            ),
        });
    } else if version > CURRENT_SCHEMA_VERSION {
        return Err(Error::Validation {
            field: "schema_version".into(),
            message: format!(
                "Database schema version {version} is newer than client version {CURRENT_SCHEMA_VERSION}. Please upgrade booking."
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON").unwrap();
        conn
    }

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<String>>>()
            .unwrap()
    }

    #[test]
    fn test_initialize_schema_creates_tables() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        assert_eq!(
            table_names(&conn),
            vec!["customer", "metadata", "reservation", "restaurant"]
        );
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_initialize_schema_discards_data() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO customer (id, name) VALUES ('c1', 'Ada')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO restaurant (id, name) VALUES ('r1', 'Nori')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO reservation (id, party_count, restaurant_id, customer_id, date)
             VALUES ('x1', 2, 'r1', 'c1', 0)",
            [],
        )
        .unwrap();

        // Populated tables with live foreign keys still reset cleanly.
        initialize_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM customer", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM reservation", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_reservation_date_default() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        conn.execute("INSERT INTO customer (id, name) VALUES ('c1', 'Ada')", [])
            .unwrap();
        conn.execute("INSERT INTO restaurant (id) VALUES ('r1')", [])
            .unwrap();
        conn.execute(
            "INSERT INTO reservation (id, party_count, restaurant_id, customer_id)
             VALUES ('x1', 2, 'r1', 'c1')",
            [],
        )
        .unwrap();

        let stored: i64 = conn
            .query_row("SELECT date FROM reservation", [], |row| row.get(0))
            .unwrap();
        let now = chrono::Utc::now().timestamp_millis();
        assert!((now - stored).abs() < 60_000);
    }

    #[test]
    fn test_get_schema_version_uninitialized() {
        let conn = create_test_connection();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_check_schema_compatibility_fresh_database() {
        let conn = create_test_connection();
        check_schema_compatibility(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_check_schema_compatibility_keeps_data() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        conn.execute("INSERT INTO customer (id, name) VALUES ('c1', 'Ada')", [])
            .unwrap();

        check_schema_compatibility(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM customer", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_check_schema_compatibility_newer_version() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();

        let err = check_schema_compatibility(&conn).unwrap_err();
        assert!(err.to_string().contains("newer than client"));
    }

    #[test]
    fn test_schema_creates_date_index() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let index_count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_reservation_date'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(index_count, 1);
    }
}
