//! Database connection management.
//!
//! This module provides the main database connection type with proper
//! initialization and PRAGMA settings for `SQLite`.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// A database connection wrapper with configuration.
///
/// Owns the single store handle of the process. Data-access operations are
/// associated functions that borrow the handle through [`Database::connection`].
///
/// # Examples
///
/// ```no_run
/// use booking::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/booking.db");
/// let db = Database::open(config).unwrap();
/// let customers = Database::fetch_customers(db.connection()).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode and the busy timeout
    /// - Enable foreign key enforcement
    /// - Initialize a fresh schema or verify an existing one
    ///
    /// Opening an existing store never discards its rows; see
    /// [`Database::reset`] for that.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization or verification fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        let conn = Self::connect(&config)?;
        super::migrations::check_schema_compatibility(&conn)?;

        log::debug!("opened database at {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Opens a database and discards its contents without looking at the
    /// stored schema version.
    ///
    /// This is the recovery path for a store whose version is missing,
    /// corrupt, or from another client release, which [`Database::open`]
    /// refuses.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the reset fails.
    pub fn open_for_reset(config: DatabaseConfig) -> Result<Self> {
        let conn = Self::connect(&config)?;
        let db = Self { conn, config };
        db.reset()?;
        Ok(db)
    }

    fn connect(config: &DatabaseConfig) -> Result<Connection> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // PRAGMA journal_mode returns a row, so it goes through query_row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {}",
            config.busy_timeout.as_millis()
        ))?;

        Ok(conn)
    }

    /// Discards every customer, restaurant, and reservation and recreates
    /// the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset statements fail.
    pub fn reset(&self) -> Result<()> {
        log::warn!("resetting database at {}", self.config.path.display());
        super::migrations::initialize_schema(&self.conn)
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns the configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let config = DatabaseConfig::new(&path);

        let db = Database::open(config).unwrap();
        assert!(path.exists());

        let journal_mode: String = db
            .connection()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");
    }

    #[test]
    fn test_database_enables_foreign_keys() {
        let dir = tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("test.db"))).unwrap();

        let enabled: i64 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_database_auto_create_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("test.db");
        let config = DatabaseConfig::new(&path);

        assert!(!path.parent().unwrap().exists());

        let _db = Database::open(config).unwrap();
        assert!(path.exists());
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn test_database_reopen_keeps_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let db = Database::open(DatabaseConfig::new(&path)).unwrap();
            Database::create_customer(db.connection(), "Ada").unwrap();
        }

        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert_eq!(Database::fetch_customers(db.connection()).unwrap().len(), 1);
    }

    #[test]
    fn test_database_reset_discards_rows() {
        let dir = tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("test.db"))).unwrap();
        Database::create_customer(db.connection(), "Ada").unwrap();

        db.reset().unwrap();

        assert!(Database::fetch_customers(db.connection()).unwrap().is_empty());
    }

    #[test]
    fn test_database_read_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let config = DatabaseConfig::new(&path);
            Database::open(config).unwrap();
        }

        let config = DatabaseConfig::new(&path).read_only();
        let db = Database::open(config).unwrap();

        let result = db.connection().execute("CREATE TABLE test (id INTEGER)", []);
        assert!(result.is_err());
    }

    fn set_schema_version(path: &std::path::Path, version: &str) {
        let conn = Connection::open(path).unwrap();
        conn.execute(
            "UPDATE metadata SET value = ?1 WHERE key = 'schema_version'",
            [version],
        )
        .unwrap();
    }

    #[test]
    fn test_open_rejects_incompatible_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        Database::open(DatabaseConfig::new(&path)).unwrap();
        set_schema_version(&path, "-1");

        let err = Database::open(DatabaseConfig::new(&path)).unwrap_err();
        assert!(err.to_string().contains("schema_version"));
    }

    #[test]
    fn test_open_for_reset_recovers_incompatible_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        {
            let db = Database::open(DatabaseConfig::new(&path)).unwrap();
            Database::create_customer(db.connection(), "Ada").unwrap();
        }
        set_schema_version(&path, "99");

        let db = Database::open_for_reset(DatabaseConfig::new(&path)).unwrap();
        assert!(Database::fetch_customers(db.connection()).unwrap().is_empty());
        drop(db);

        // The reset store opens normally again.
        Database::open(DatabaseConfig::new(&path)).unwrap();
    }
}
