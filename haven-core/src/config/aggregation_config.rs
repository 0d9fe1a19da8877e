use serde::{Deserialize, Serialize};

use super::defaults;

/// Global Pattern Aggregator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Page size for the tenant scan.
    pub tenant_page_size: usize,
    /// Review-flag threshold (strict greater-than).
    pub review_threshold: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            tenant_page_size: defaults::DEFAULT_TENANT_PAGE_SIZE,
            review_threshold: defaults::DEFAULT_REVIEW_THRESHOLD,
        }
    }
}
