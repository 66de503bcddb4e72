//! Shared database test utilities.

use booking::database::{Database, DatabaseConfig};

/// Creates a temporary test database.
///
/// The temporary directory is leaked so it outlives the returned handle.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}
