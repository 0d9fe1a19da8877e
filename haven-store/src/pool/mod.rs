//! Single-writer connection wrapper.
//!
//! The batch jobs are sequential, so one mutex-guarded connection is
//! enough; the wrapper exists so callers never touch rusqlite directly.

pub mod pragmas;

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use haven_core::errors::{HavenResult, StoreError};

use crate::to_store_err;

/// Mutex-guarded write connection with pragmas applied.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a connection to the given database file.
    pub fn open(path: &Path) -> HavenResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_store_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory connection (for testing).
    pub fn open_in_memory() -> HavenResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_store_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the connection, serialized by the mutex.
    pub fn with_conn<F, T>(&self, f: F) -> HavenResult<T>
    where
        F: FnOnce(&Connection) -> HavenResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| StoreError::PoolPoisoned)?;
        f(&guard)
    }
}
