//! BiasLearner: orchestrates scan → validate → group → merge → persist.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use haven_core::config::LearnerConfig;
use haven_core::errors::HavenResult;
use haven_core::models::{CorrectionFeedbackEntry, FamilyBiasWeights, LearnerRunSummary};
use haven_core::traits::IDocumentStore;

use crate::merge;
use crate::validate;

/// The Family Bias Learner.
///
/// Each run consumes one batch of unprocessed feedback across all
/// tenants and rewrites the ledger of every tenant that contributed a
/// valid entry. A tenant-level failure is logged and skipped; its
/// entries stay unprocessed and are retried next run.
pub struct BiasLearner {
    store: Arc<dyn IDocumentStore>,
    config: LearnerConfig,
}

impl BiasLearner {
    /// Create a learner over the given store with default config.
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self {
            store,
            config: LearnerConfig::default(),
        }
    }

    /// Create with explicit config.
    pub fn with_config(store: Arc<dyn IDocumentStore>, config: LearnerConfig) -> Self {
        Self { store, config }
    }

    /// Run one learner invocation.
    ///
    /// A failure in the initial scan aborts the whole run and propagates
    /// so the external scheduler retries it.
    pub fn run(&self, now: DateTime<Utc>) -> HavenResult<LearnerRunSummary> {
        let raw_docs = self
            .store
            .scan_unprocessed_feedback(self.config.feedback_batch_size)?;

        let mut summary = LearnerRunSummary {
            entries_scanned: raw_docs.len(),
            ..Default::default()
        };

        // Validate each document; invalid ones are skipped, not retried.
        let mut by_tenant: BTreeMap<String, Vec<CorrectionFeedbackEntry>> = BTreeMap::new();
        for doc in &raw_docs {
            match validate::decode_feedback_entry(doc) {
                Ok(entry) => by_tenant.entry(entry.tenant_id.clone()).or_default().push(entry),
                Err(reason) => {
                    warn!(doc_id = %doc.id, %reason, "skipping invalid feedback entry");
                    summary.entries_invalid += 1;
                }
            }
        }

        for (tenant_id, entries) in by_tenant {
            let entry_count = entries.len();
            match self.process_tenant(&tenant_id, entries, now) {
                Ok(()) => {
                    summary.tenants_updated += 1;
                    summary.entries_processed += entry_count;
                }
                Err(e) => {
                    // Entries stay unprocessed and are retried next run.
                    error!(tenant_id = %tenant_id, error = %e, "tenant processing failed");
                    summary.tenants_failed += 1;
                }
            }
        }

        info!(
            scanned = summary.entries_scanned,
            invalid = summary.entries_invalid,
            processed = summary.entries_processed,
            tenants_updated = summary.tenants_updated,
            tenants_failed = summary.tenants_failed,
            "bias learner run complete"
        );
        Ok(summary)
    }

    /// Fold one tenant's entries into its ledger and mark them consumed.
    fn process_tenant(
        &self,
        tenant_id: &str,
        entries: Vec<CorrectionFeedbackEntry>,
        now: DateTime<Utc>,
    ) -> HavenResult<()> {
        let prior = match self.store.get_bias_weights(tenant_id)? {
            Some(raw) => match validate::decode_bias_weights(&raw) {
                Ok(weights) => weights,
                Err(reason) => {
                    // A corrupt ledger is rebuilt from this batch onward.
                    warn!(tenant_id = %tenant_id, %reason, "ledger undecodable, starting from empty baseline");
                    FamilyBiasWeights::empty(tenant_id, now)
                }
            },
            None => FamilyBiasWeights::empty(tenant_id, now),
        };

        let patterns = merge::merge_patterns(&prior.patterns, &entries);
        let computed = merge::rollup_category_adjustments(&patterns);
        let category_adjustments =
            merge::merge_category_adjustments(&prior.category_adjustments, computed);

        let ledger = FamilyBiasWeights {
            tenant_id: tenant_id.to_string(),
            total_corrections: prior.total_corrections + entries.len() as u64,
            last_updated: now,
            category_adjustments,
            patterns,
        };

        // Ledger and consumption markers land in one transaction. On
        // failure both roll back and the entries replay next run.
        let entry_ids: Vec<String> = entries.iter().map(|e| e.id.clone()).collect();
        self.store.commit_tenant_learning(&ledger, &entry_ids, now)?;

        info!(
            tenant_id = %tenant_id,
            entries = entries.len(),
            patterns = ledger.patterns.len(),
            total_corrections = ledger.total_corrections,
            "ledger rewritten"
        );
        Ok(())
    }
}
