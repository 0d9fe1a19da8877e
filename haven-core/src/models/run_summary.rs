use serde::{Deserialize, Serialize};

/// Outcome of one Family Bias Learner invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerRunSummary {
    /// Unprocessed entries returned by the scan.
    pub entries_scanned: usize,
    /// Entries skipped for failing schema validation.
    pub entries_invalid: usize,
    /// Entries folded into a ledger and marked processed.
    pub entries_processed: usize,
    /// Tenants whose ledger was rewritten.
    pub tenants_updated: usize,
    /// Tenants skipped after a processing failure.
    pub tenants_failed: usize,
}

/// Outcome of one Global Pattern Aggregator invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationRunSummary {
    /// Period key, `YYYY-MM`.
    pub period: String,
    /// Tenants visited across all pages, including skipped ones.
    pub tenants_visited: usize,
    /// Tenants skipped after a processing failure.
    pub tenants_failed: usize,
    /// Tenants that contributed at least one pattern.
    pub participating_families: u64,
    pub pattern_count: u64,
    pub flagged_pattern_count: u64,
    pub total_corrections: u64,
    pub estimated_accuracy_improvement: f64,
}
