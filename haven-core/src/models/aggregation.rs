use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::period::ReportingPeriod;

/// Cross-tenant aggregate for one correction pattern in one reporting
/// period. Never stores a tenant identifier; `family_count` is the size
/// of a hashed-identity set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalPatternAggregation {
    /// Deterministic id: `{period}_{original}_to_{corrected}`.
    pub id: String,
    /// Period key, `YYYY-MM`.
    pub period: String,
    pub original_category: String,
    pub corrected_category: String,
    /// Sum of pattern counts across contributing tenants.
    pub total_correction_count: u64,
    /// Number of distinct (hashed) tenants contributing to the pattern.
    pub family_count: u64,
    /// True when the total strictly exceeds the review threshold.
    pub flagged_for_review: bool,
    pub aggregated_at: DateTime<Utc>,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
}

impl GlobalPatternAggregation {
    /// Deterministic document id for a (period, pattern) pair.
    pub fn document_id(period: &ReportingPeriod, original: &str, corrected: &str) -> String {
        format!("{}_{}_to_{}", period.key(), original, corrected)
    }
}
