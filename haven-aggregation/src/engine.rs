//! PatternAggregator: paginate tenants → opt-out check → fold ledgers →
//! batched anonymized writes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use haven_core::anonymize::{tenant_hash, AnonymousTenant};
use haven_core::batch::chunk_ops;
use haven_core::config::AggregationConfig;
use haven_core::errors::{HavenError, HavenResult};
use haven_core::models::{
    AggregationRunSummary, FamilyBiasWeights, GlobalModelMetrics, GlobalPatternAggregation,
};
use haven_core::period::ReportingPeriod;
use haven_core::traits::{IDocumentStore, WriteBatch, WriteOp};

use crate::accumulator::PatternAccumulator;
use crate::improvement;

/// Whether a visited tenant contributed to the aggregation.
enum TenantOutcome {
    Contributed,
    Skipped,
}

/// The Global Pattern Aggregator.
///
/// Pagination and batch-commit failures are run-level and propagate for
/// the scheduler's retry; a single tenant's failure is recorded under
/// its anonymous label and the run continues.
pub struct PatternAggregator {
    store: Arc<dyn IDocumentStore>,
    config: AggregationConfig,
}

impl PatternAggregator {
    /// Create an aggregator over the given store with default config.
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self {
            store,
            config: AggregationConfig::default(),
        }
    }

    /// Create with explicit config.
    pub fn with_config(store: Arc<dyn IDocumentStore>, config: AggregationConfig) -> Self {
        Self { store, config }
    }

    /// Run one aggregation for the period containing `now`.
    ///
    /// Re-running against unchanged ledgers rewrites identical
    /// documents: ids are deterministic and every write is a full
    /// overwrite.
    pub fn run(&self, now: DateTime<Utc>) -> HavenResult<AggregationRunSummary> {
        let period = ReportingPeriod::current(now);
        info!(period = %period, "global aggregation starting");

        let mut accumulator = PatternAccumulator::new();
        let mut tenants_visited = 0usize;
        let mut tenants_failed = 0usize;
        let mut cursor: Option<String> = None;

        loop {
            let page = self
                .store
                .list_tenants(self.config.tenant_page_size, cursor.as_deref())?;

            for tenant in &page.tenants {
                tenants_visited += 1;
                match self.fold_tenant(&tenant.tenant_id, &mut accumulator) {
                    Ok(TenantOutcome::Contributed) => {}
                    Ok(TenantOutcome::Skipped) => {
                        debug!(tenant = %AnonymousTenant::of(&tenant.tenant_id), "tenant skipped");
                    }
                    Err(e) => {
                        // The raw tenant id never reaches the error record.
                        error!(
                            tenant = %AnonymousTenant::of(&tenant.tenant_id),
                            error = %e,
                            "tenant aggregation failed"
                        );
                        tenants_failed += 1;
                    }
                }
            }

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        let participating_families = accumulator.participating_families();
        let total_corrections = accumulator.total_corrections();
        let pattern_count = accumulator.pattern_count();

        let aggregations =
            accumulator.into_aggregations(&period, self.config.review_threshold, now);
        let flagged_pattern_count = aggregations
            .iter()
            .filter(|a| a.flagged_for_review)
            .count() as u64;

        let estimated_accuracy_improvement =
            improvement::estimate(total_corrections, flagged_pattern_count);

        let metrics = GlobalModelMetrics {
            period: period.key(),
            total_corrections,
            participating_families,
            pattern_count,
            flagged_pattern_count,
            estimated_accuracy_improvement,
            aggregated_at: now,
        };

        self.commit(aggregations, metrics)?;

        let summary = AggregationRunSummary {
            period: period.key(),
            tenants_visited,
            tenants_failed,
            participating_families,
            pattern_count,
            flagged_pattern_count,
            total_corrections,
            estimated_accuracy_improvement,
        };
        info!(
            period = %period,
            tenants_visited = summary.tenants_visited,
            participating = summary.participating_families,
            patterns = summary.pattern_count,
            flagged = summary.flagged_pattern_count,
            corrections = summary.total_corrections,
            improvement = summary.estimated_accuracy_improvement,
            "global aggregation complete"
        );
        Ok(summary)
    }

    /// Read one tenant's settings and ledger and fold it in.
    fn fold_tenant(
        &self,
        tenant_id: &str,
        accumulator: &mut PatternAccumulator,
    ) -> HavenResult<TenantOutcome> {
        if let Some(settings) = self.store.get_tenant_settings(tenant_id)? {
            if !settings.contributes() {
                return Ok(TenantOutcome::Skipped);
            }
        }

        let raw = match self.store.get_bias_weights(tenant_id)? {
            Some(raw) => raw,
            None => return Ok(TenantOutcome::Skipped),
        };
        let ledger: FamilyBiasWeights =
            serde_json::from_str(&raw.body).map_err(|e| HavenError::TenantProcessing {
                tenant: AnonymousTenant::of(tenant_id).to_string(),
                reason: format!("ledger decode failed: {e}"),
            })?;
        if ledger.patterns.is_empty() {
            return Ok(TenantOutcome::Skipped);
        }

        accumulator.fold_tenant(tenant_hash(tenant_id), &ledger.patterns);
        Ok(TenantOutcome::Contributed)
    }

    /// Write all aggregation documents plus the metrics document in
    /// capped batches. The chunk size leaves one op of headroom so the
    /// metrics write always fits in the final batch.
    fn commit(
        &self,
        aggregations: Vec<GlobalPatternAggregation>,
        metrics: GlobalModelMetrics,
    ) -> HavenResult<()> {
        let mut chunks = chunk_ops(aggregations);
        if chunks.is_empty() {
            chunks.push(Vec::new());
        }
        let last = chunks.len() - 1;

        for (i, chunk) in chunks.into_iter().enumerate() {
            let mut batch = WriteBatch::new();
            for aggregation in chunk {
                batch.push(WriteOp::PutAggregation(aggregation))?;
            }
            if i == last {
                batch.push(WriteOp::PutMetrics(metrics.clone()))?;
            }
            let ops = batch.len();
            self.store.commit_batch(batch)?;
            debug!(batch = i + 1, ops, "aggregation batch committed");
        }
        Ok(())
    }
}
