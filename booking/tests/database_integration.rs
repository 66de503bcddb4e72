//! Integration tests for the database layer.
//!
//! These tests exercise the full database stack including auto-initialization,
//! schema versioning, reset, and access from several connections.

mod common;

use std::thread;

use tempfile::tempdir;

use booking::database::{get_schema_version, Database, DatabaseConfig};

#[test]
fn test_database_auto_creation() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("subdir").join("test.db");

    assert!(!db_path.parent().unwrap().exists());

    let _db = Database::open(DatabaseConfig::new(&db_path)).unwrap();

    assert!(db_path.exists());
}

#[test]
fn test_schema_version_compatibility() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("version_test.db");

    {
        let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
        assert_eq!(get_schema_version(db.connection()).unwrap(), 1);
    }

    // Reopen should work (same version)
    Database::open(DatabaseConfig::new(&db_path)).unwrap();

    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();
    }

    let err = Database::open(DatabaseConfig::new(&db_path)).unwrap_err();
    assert!(err.to_string().contains("newer than client"));
}

#[test]
fn test_reopen_preserves_reservations() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("reopen.db");

    let reservation_id = {
        let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
        let (ada, nori) = common::ada_and_nori(db.connection());
        let request = booking::Reservation::builder(ada.id, nori.id, common::party(2)).build();
        Database::create_reservation(db.connection(), &request)
            .unwrap()
            .id
    };

    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    let views = Database::fetch_reservations(db.connection()).unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].reservation_id, reservation_id);
}

#[test]
fn test_reset_is_repeatable() {
    let db = common::database::create_test_database();
    common::ada_and_nori(db.connection());

    db.reset().unwrap();
    db.reset().unwrap();

    assert!(Database::fetch_customers(db.connection()).unwrap().is_empty());
    assert!(Database::fetch_restaurants(db.connection()).unwrap().is_empty());
    assert_eq!(Database::count_reservations(db.connection()).unwrap(), 0);
}

#[test]
fn test_concurrent_write_operations() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("concurrent.db");

    // Initialize database
    Database::open(DatabaseConfig::new(&db_path)).unwrap();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let path = db_path.clone();
            thread::spawn(move || {
                let db = Database::open(DatabaseConfig::new(path))?;
                Database::create_customer(db.connection(), &format!("customer {i}"))
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    assert_eq!(Database::fetch_customers(db.connection()).unwrap().len(), 10);
}
