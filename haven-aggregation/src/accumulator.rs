//! Cross-tenant pattern accumulation with hashed-identity counting.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};

use haven_core::models::{CorrectionPattern, GlobalPatternAggregation};
use haven_core::period::ReportingPeriod;

/// Composite map key for a correction pattern: the ordered category pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PatternKey {
    pub original: String,
    pub corrected: String,
}

/// Running totals for one pattern.
#[derive(Debug, Default)]
struct PatternStats {
    total_count: u64,
    /// Hashed tenant identities; the set size is the unique-tenant
    /// count, order-independent within a run.
    contributors: BTreeSet<u32>,
}

/// Accumulates every participating tenant's patterns into global totals.
///
/// Keys are BTreeMap-ordered so the emitted documents are deterministic
/// for a given set of input ledgers.
#[derive(Debug, Default)]
pub struct PatternAccumulator {
    patterns: BTreeMap<PatternKey, PatternStats>,
    participating_families: u64,
    total_corrections: u64,
}

impl PatternAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tenant's ledger patterns in. The tenant is identified
    /// only by its hash. Counts the tenant as participating when it
    /// contributes at least one pattern.
    pub fn fold_tenant(&mut self, tenant_hash: u32, patterns: &[CorrectionPattern]) {
        if patterns.is_empty() {
            return;
        }
        self.participating_families += 1;
        for pattern in patterns {
            let key = PatternKey {
                original: pattern.original_category.clone(),
                corrected: pattern.corrected_category.clone(),
            };
            let stats = self.patterns.entry(key).or_default();
            stats.total_count += pattern.count;
            stats.contributors.insert(tenant_hash);
            self.total_corrections += pattern.count;
        }
    }

    pub fn participating_families(&self) -> u64 {
        self.participating_families
    }

    pub fn total_corrections(&self) -> u64 {
        self.total_corrections
    }

    pub fn pattern_count(&self) -> u64 {
        self.patterns.len() as u64
    }

    /// Emit one aggregation document per pattern, in key order, with
    /// deterministic ids. A pattern is flagged when its total strictly
    /// exceeds the review threshold.
    pub fn into_aggregations(
        self,
        period: &ReportingPeriod,
        review_threshold: u64,
        now: DateTime<Utc>,
    ) -> Vec<GlobalPatternAggregation> {
        self.patterns
            .into_iter()
            .map(|(key, stats)| GlobalPatternAggregation {
                id: GlobalPatternAggregation::document_id(period, &key.original, &key.corrected),
                period: period.key(),
                original_category: key.original,
                corrected_category: key.corrected,
                total_correction_count: stats.total_count,
                family_count: stats.contributors.len() as u64,
                flagged_for_review: stats.total_count > review_threshold,
                aggregated_at: now,
                period_start: period.start(),
                period_end: period.end(),
            })
            .collect()
    }
}
