//! StoreEngine — owns the write connection, implements IDocumentStore,
//! runs migrations on open.

use std::path::Path;

use chrono::{DateTime, Utc};

use haven_core::errors::HavenResult;
use haven_core::models::{
    CorrectionFeedbackEntry, FamilyBiasWeights, GlobalModelMetrics, GlobalPatternAggregation,
    TenantPage, TenantRecord, TenantSettings,
};
use haven_core::traits::{IDocumentStore, RawDocument, WriteBatch};

use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries;

/// The SQLite-backed document store.
pub struct StoreEngine {
    writer: WriteConnection,
}

impl StoreEngine {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> HavenResult<Self> {
        let writer = WriteConnection::open(path)?;
        let engine = Self { writer };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> HavenResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        let engine = Self { writer };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> HavenResult<()> {
        self.writer.with_conn(migrations::run_migrations)
    }
}

impl IDocumentStore for StoreEngine {
    fn scan_unprocessed_feedback(&self, limit: usize) -> HavenResult<Vec<RawDocument>> {
        self.writer
            .with_conn(|conn| queries::feedback_ops::scan_unprocessed(conn, limit))
    }

    fn mark_feedback_processed(
        &self,
        tenant_id: &str,
        entry_ids: &[String],
        processed_at: DateTime<Utc>,
    ) -> HavenResult<()> {
        self.writer.with_conn(|conn| {
            queries::feedback_ops::mark_processed(conn, tenant_id, entry_ids, processed_at)
        })
    }

    fn put_feedback_entry(&self, entry: &CorrectionFeedbackEntry) -> HavenResult<()> {
        self.writer
            .with_conn(|conn| queries::feedback_ops::put_entry(conn, entry))
    }

    fn get_bias_weights(&self, tenant_id: &str) -> HavenResult<Option<RawDocument>> {
        self.writer
            .with_conn(|conn| queries::ledger_ops::get_weights(conn, tenant_id))
    }

    fn put_bias_weights(&self, weights: &FamilyBiasWeights) -> HavenResult<()> {
        self.writer
            .with_conn(|conn| queries::ledger_ops::put_weights(conn, weights))
    }

    fn commit_tenant_learning(
        &self,
        weights: &FamilyBiasWeights,
        entry_ids: &[String],
        processed_at: DateTime<Utc>,
    ) -> HavenResult<()> {
        self.writer.with_conn(|conn| {
            queries::ledger_ops::commit_learning(conn, weights, entry_ids, processed_at)
        })
    }

    fn list_tenants(&self, page_size: usize, cursor: Option<&str>) -> HavenResult<TenantPage> {
        self.writer
            .with_conn(|conn| queries::tenant_ops::list_page(conn, page_size, cursor))
    }

    fn get_tenant_settings(&self, tenant_id: &str) -> HavenResult<Option<TenantSettings>> {
        self.writer
            .with_conn(|conn| queries::tenant_ops::get_settings(conn, tenant_id))
    }

    fn put_tenant(&self, tenant: &TenantRecord) -> HavenResult<()> {
        self.writer
            .with_conn(|conn| queries::tenant_ops::put_tenant(conn, tenant))
    }

    fn put_tenant_settings(&self, tenant_id: &str, settings: &TenantSettings) -> HavenResult<()> {
        self.writer
            .with_conn(|conn| queries::tenant_ops::put_settings(conn, tenant_id, settings))
    }

    fn commit_batch(&self, batch: WriteBatch) -> HavenResult<()> {
        self.writer
            .with_conn(|conn| queries::aggregation_ops::commit_batch(conn, batch))
    }

    fn get_aggregation(&self, id: &str) -> HavenResult<Option<GlobalPatternAggregation>> {
        self.writer
            .with_conn(|conn| queries::aggregation_ops::get_aggregation(conn, id))
    }

    fn get_metrics(&self, period: &str) -> HavenResult<Option<GlobalModelMetrics>> {
        self.writer
            .with_conn(|conn| queries::aggregation_ops::get_metrics(conn, period))
    }
}
