//! Shared server state.

use std::sync::{Arc, Mutex};

use booking::Database;
use rusqlite::Connection;

use super::error::ApiError;

/// State injected into every handler: the process's single store handle.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Database>>,
}

impl AppState {
    /// Wraps an open database.
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Runs `f` against the connection on a blocking worker thread.
    ///
    /// Requests serialize on the lock; each holds it for one round trip.
    pub async fn with_connection<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Connection) -> booking::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let guard = db
                .lock()
                .map_err(|_| ApiError::internal("database lock poisoned"))?;
            f(guard.connection()).map_err(ApiError::from)
        })
        .await
        .map_err(|e| ApiError::internal(format!("database task failed: {e}")))?
    }
}
