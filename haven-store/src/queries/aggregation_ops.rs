//! Global aggregation and metrics documents: batched overwrites, point reads.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use haven_core::constants::WRITE_BATCH_HARD_LIMIT;
use haven_core::errors::{HavenResult, StoreError};
use haven_core::models::{GlobalModelMetrics, GlobalPatternAggregation};
use haven_core::traits::{WriteBatch, WriteOp};

use crate::to_store_err;

/// Commit a write batch in one transaction. Batches over the hard op
/// limit are rejected before any write happens.
pub fn commit_batch(conn: &Connection, batch: WriteBatch) -> HavenResult<()> {
    let ops = batch.into_ops();
    if ops.len() > WRITE_BATCH_HARD_LIMIT {
        return Err(StoreError::BatchLimitExceeded {
            ops: ops.len(),
            limit: WRITE_BATCH_HARD_LIMIT,
        }
        .into());
    }
    if ops.is_empty() {
        return Ok(());
    }

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_store_err(format!("commit_batch begin: {e}")))?;

    for op in &ops {
        match op {
            WriteOp::PutAggregation(agg) => put_aggregation(&tx, agg)?,
            WriteOp::PutMetrics(metrics) => put_metrics(&tx, metrics)?,
        }
    }

    tx.commit()
        .map_err(|e| to_store_err(format!("commit_batch commit: {e}")))?;
    debug!(ops = ops.len(), "write batch committed");
    Ok(())
}

fn put_aggregation(conn: &Connection, agg: &GlobalPatternAggregation) -> HavenResult<()> {
    let body = serde_json::to_string(agg).map_err(|e| to_store_err(e.to_string()))?;
    conn.execute(
        "INSERT OR REPLACE INTO global_aggregations (id, period, body) VALUES (?1, ?2, ?3)",
        params![agg.id, agg.period, body],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

fn put_metrics(conn: &Connection, metrics: &GlobalModelMetrics) -> HavenResult<()> {
    let body = serde_json::to_string(metrics).map_err(|e| to_store_err(e.to_string()))?;
    conn.execute(
        "INSERT OR REPLACE INTO global_metrics (period, body) VALUES (?1, ?2)",
        params![metrics.period, body],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

pub fn get_aggregation(
    conn: &Connection,
    id: &str,
) -> HavenResult<Option<GlobalPatternAggregation>> {
    let body: Option<String> = conn
        .query_row(
            "SELECT body FROM global_aggregations WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_store_err(e.to_string()))?;

    body.map(|b| serde_json::from_str(&b).map_err(|e| to_store_err(e.to_string())))
        .transpose()
}

pub fn get_metrics(conn: &Connection, period: &str) -> HavenResult<Option<GlobalModelMetrics>> {
    let body: Option<String> = conn
        .query_row(
            "SELECT body FROM global_metrics WHERE period = ?1",
            params![period],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_store_err(e.to_string()))?;

    body.map(|b| serde_json::from_str(&b).map_err(|e| to_store_err(e.to_string())))
        .transpose()
}
