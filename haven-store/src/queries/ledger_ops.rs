//! Bias-ledger reads and full-overwrite writes.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use haven_core::errors::HavenResult;
use haven_core::models::FamilyBiasWeights;
use haven_core::traits::RawDocument;

use super::feedback_ops;
use crate::to_store_err;

/// Point read of a tenant's ledger, undecoded.
pub fn get_weights(conn: &Connection, tenant_id: &str) -> HavenResult<Option<RawDocument>> {
    conn.query_row(
        "SELECT tenant_id, body FROM bias_weights WHERE tenant_id = ?1",
        params![tenant_id],
        |row| {
            Ok(RawDocument {
                id: row.get(0)?,
                body: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_store_err(e.to_string()))
}

/// Full overwrite of a tenant's ledger. Deliberately not a merge: the
/// learner recomputes the whole document each run so re-runs converge.
pub fn put_weights(conn: &Connection, weights: &FamilyBiasWeights) -> HavenResult<()> {
    let body = serde_json::to_string(weights).map_err(|e| to_store_err(e.to_string()))?;
    conn.execute(
        "INSERT OR REPLACE INTO bias_weights (tenant_id, body, updated_at)
         VALUES (?1, ?2, ?3)",
        params![
            weights.tenant_id,
            body,
            weights.last_updated.to_rfc3339()
        ],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

/// Overwrite the tenant's ledger and mark the consumed entries in one
/// transaction. A failure rolls both back, so the entries replay next
/// run against the unchanged prior ledger.
pub fn commit_learning(
    conn: &Connection,
    weights: &FamilyBiasWeights,
    entry_ids: &[String],
    processed_at: DateTime<Utc>,
) -> HavenResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_store_err(format!("commit_learning begin: {e}")))?;
    put_weights(&tx, weights)?;
    feedback_ops::mark_entries(
        &tx,
        &weights.tenant_id,
        entry_ids,
        &processed_at.to_rfc3339(),
    )?;
    tx.commit()
        .map_err(|e| to_store_err(format!("commit_learning commit: {e}")))?;
    Ok(())
}
