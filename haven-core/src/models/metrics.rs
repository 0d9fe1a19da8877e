use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-period summary of a global aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalModelMetrics {
    /// Period key, `YYYY-MM`; also the document id.
    pub period: String,
    pub total_corrections: u64,
    pub participating_families: u64,
    pub pattern_count: u64,
    pub flagged_pattern_count: u64,
    /// Estimated accuracy improvement, percent, bounded [0, 5].
    pub estimated_accuracy_improvement: f64,
    pub aggregated_at: DateTime<Utc>,
}
