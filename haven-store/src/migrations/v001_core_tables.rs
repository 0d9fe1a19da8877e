//! v001: tenants, tenant_settings, feedback_entries, bias_weights,
//! global_aggregations, global_metrics.

use rusqlite::Connection;

use haven_core::errors::HavenResult;

use crate::to_store_err;

pub fn migrate(conn: &Connection) -> HavenResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS tenants (
            tenant_id   TEXT PRIMARY KEY,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS tenant_settings (
            tenant_id   TEXT PRIMARY KEY,
            body        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS feedback_entries (
            id          TEXT PRIMARY KEY,
            tenant_id   TEXT NOT NULL,
            processed   INTEGER NOT NULL DEFAULT 0,
            body        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_feedback_unprocessed
            ON feedback_entries(processed, tenant_id);

        CREATE TABLE IF NOT EXISTS bias_weights (
            tenant_id   TEXT PRIMARY KEY,
            body        TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS global_aggregations (
            id          TEXT PRIMARY KEY,
            period      TEXT NOT NULL,
            body        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_aggregations_period
            ON global_aggregations(period);

        CREATE TABLE IF NOT EXISTS global_metrics (
            period      TEXT PRIMARY KEY,
            body        TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}
