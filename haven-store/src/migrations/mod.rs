//! Idempotent schema migrations, run on every open.

mod v001_core_tables;

use rusqlite::Connection;
use tracing::debug;

use haven_core::errors::{HavenResult, StoreError};

/// Run all migrations in order. Each is idempotent.
pub fn run_migrations(conn: &Connection) -> HavenResult<()> {
    v001_core_tables::migrate(conn).map_err(|e| StoreError::MigrationFailed {
        reason: e.to_string(),
    })?;
    debug!("schema migrations applied");
    Ok(())
}
