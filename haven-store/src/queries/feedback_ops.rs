//! Feedback-entry scans and the consumption-marker update.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use haven_core::errors::HavenResult;
use haven_core::models::CorrectionFeedbackEntry;
use haven_core::traits::RawDocument;

use crate::to_store_err;

/// Insert or overwrite a feedback entry.
pub fn put_entry(conn: &Connection, entry: &CorrectionFeedbackEntry) -> HavenResult<()> {
    let body = serde_json::to_string(entry).map_err(|e| to_store_err(e.to_string()))?;
    conn.execute(
        "INSERT OR REPLACE INTO feedback_entries (id, tenant_id, processed, body)
         VALUES (?1, ?2, ?3, ?4)",
        params![entry.id, entry.tenant_id, entry.processed as i32, body],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

/// Cross-tenant scan of unprocessed entries, up to `limit`. Returns raw
/// document bodies; the caller performs the typed decode.
pub fn scan_unprocessed(conn: &Connection, limit: usize) -> HavenResult<Vec<RawDocument>> {
    let mut stmt = conn
        .prepare("SELECT id, body FROM feedback_entries WHERE processed = 0 LIMIT ?1")
        .map_err(|e| to_store_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(RawDocument {
                id: row.get(0)?,
                body: row.get(1)?,
            })
        })
        .map_err(|e| to_store_err(e.to_string()))?;

    let mut docs = Vec::new();
    for row in rows {
        docs.push(row.map_err(|e| to_store_err(e.to_string()))?);
    }
    Ok(docs)
}

/// Flip the consumption marker on a tenant's entries, atomically.
/// The JSON body is patched in the same statement so the stored document
/// stays consistent with the filter column.
pub fn mark_processed(
    conn: &Connection,
    tenant_id: &str,
    entry_ids: &[String],
    processed_at: DateTime<Utc>,
) -> HavenResult<()> {
    if entry_ids.is_empty() {
        return Ok(());
    }
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_store_err(format!("mark_processed begin: {e}")))?;
    mark_entries(&tx, tenant_id, entry_ids, &processed_at.to_rfc3339())?;
    tx.commit()
        .map_err(|e| to_store_err(format!("mark_processed commit: {e}")))?;
    Ok(())
}

/// The marker statements, without transaction management. The caller
/// decides the transaction scope.
pub(crate) fn mark_entries(
    conn: &Connection,
    tenant_id: &str,
    entry_ids: &[String],
    ts: &str,
) -> HavenResult<()> {
    for id in entry_ids {
        conn.execute(
            "UPDATE feedback_entries
             SET processed = 1,
                 body = json_set(body, '$.processed', json('true'), '$.processedAt', ?1)
             WHERE id = ?2 AND tenant_id = ?3",
            params![ts, id, tenant_id],
        )
        .map_err(|e| to_store_err(e.to_string()))?;
    }
    Ok(())
}
