use chrono::{DateTime, Utc};

use crate::constants::WRITE_BATCH_HARD_LIMIT;
use crate::errors::{HavenResult, StoreError};
use crate::models::{
    CorrectionFeedbackEntry, FamilyBiasWeights, GlobalModelMetrics, GlobalPatternAggregation,
    TenantPage, TenantRecord, TenantSettings,
};

/// A persisted document before typed decoding.
///
/// The scan paths hand these back undecoded so schema failures become
/// per-document skip events instead of run-level errors.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub id: String,
    pub body: String,
}

/// One operation in an atomic write batch. All ops are full overwrites
/// keyed by the document's deterministic id.
#[derive(Debug, Clone)]
pub enum WriteOp {
    PutAggregation(GlobalPatternAggregation),
    PutMetrics(GlobalModelMetrics),
}

/// An atomic batch of writes, capped at the store's hard op limit.
#[derive(Debug, Default)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation, rejecting batches over the hard limit.
    pub fn push(&mut self, op: WriteOp) -> HavenResult<()> {
        if self.ops.len() >= WRITE_BATCH_HARD_LIMIT {
            return Err(StoreError::BatchLimitExceeded {
                ops: self.ops.len() + 1,
                limit: WRITE_BATCH_HARD_LIMIT,
            }
            .into());
        }
        self.ops.push(op);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }
}

/// Document store interface: point reads, filtered scans, cursor
/// pagination, a cross-tenant feedback scan, and atomic capped batches.
///
/// The store itself is an external collaborator; both engines talk only
/// to this trait so tests can run against the in-memory SQLite backend.
pub trait IDocumentStore: Send + Sync {
    // --- Feedback ---
    /// Scan up to `limit` unprocessed feedback entries across all
    /// tenants. No ordering guarantee.
    fn scan_unprocessed_feedback(&self, limit: usize) -> HavenResult<Vec<RawDocument>>;
    /// Mark a tenant's entries consumed, atomically.
    fn mark_feedback_processed(
        &self,
        tenant_id: &str,
        entry_ids: &[String],
        processed_at: DateTime<Utc>,
    ) -> HavenResult<()>;
    /// Insert or overwrite a feedback entry (annotation flow, fixtures).
    fn put_feedback_entry(&self, entry: &CorrectionFeedbackEntry) -> HavenResult<()>;

    // --- Bias ledger ---
    fn get_bias_weights(&self, tenant_id: &str) -> HavenResult<Option<RawDocument>>;
    /// Full overwrite of the tenant's ledger.
    fn put_bias_weights(&self, weights: &FamilyBiasWeights) -> HavenResult<()>;
    /// Overwrite the tenant's ledger and mark the consumed entries in
    /// one transaction, so a failure leaves both untouched and the
    /// entries replay next run without double counting.
    fn commit_tenant_learning(
        &self,
        weights: &FamilyBiasWeights,
        entry_ids: &[String],
        processed_at: DateTime<Utc>,
    ) -> HavenResult<()>;

    // --- Tenants ---
    fn list_tenants(&self, page_size: usize, cursor: Option<&str>) -> HavenResult<TenantPage>;
    fn get_tenant_settings(&self, tenant_id: &str) -> HavenResult<Option<TenantSettings>>;
    fn put_tenant(&self, tenant: &TenantRecord) -> HavenResult<()>;
    fn put_tenant_settings(&self, tenant_id: &str, settings: &TenantSettings) -> HavenResult<()>;

    // --- Aggregation output ---
    /// Commit a batch atomically. Batches over the hard op limit are
    /// rejected with `StoreError::BatchLimitExceeded`.
    fn commit_batch(&self, batch: WriteBatch) -> HavenResult<()>;
    fn get_aggregation(&self, id: &str) -> HavenResult<Option<GlobalPatternAggregation>>;
    fn get_metrics(&self, period: &str) -> HavenResult<Option<GlobalModelMetrics>>;
}
