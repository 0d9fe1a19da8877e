use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adjustment::Adjustment;

/// An (original → corrected) category pair with its running count and
/// the adjustment derived from that count.
///
/// Identity is the ordered pair. The count accumulates monotonically
/// across learner runs; the adjustment is recomputed from the count each
/// run, never accumulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionPattern {
    pub original_category: String,
    pub corrected_category: String,
    pub count: u64,
    pub adjustment: Adjustment,
}

/// Per-tenant bias ledger: accumulated correction patterns and the
/// per-category confidence adjustments derived from them.
///
/// Fully overwritten on every learner run for the tenant. Every value in
/// `category_adjustments` is clamped to [-50, +20] by construction of
/// `Adjustment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyBiasWeights {
    pub tenant_id: String,
    /// Monotonic count of all corrections ever folded into this ledger.
    pub total_corrections: u64,
    pub last_updated: DateTime<Utc>,
    /// Category → bounded adjustment. BTreeMap keeps serialization
    /// deterministic so re-runs produce byte-identical documents.
    pub category_adjustments: BTreeMap<String, Adjustment>,
    pub patterns: Vec<CorrectionPattern>,
}

impl FamilyBiasWeights {
    /// Empty baseline for a tenant with no prior ledger.
    pub fn empty(tenant_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            total_corrections: 0,
            last_updated: now,
            category_adjustments: BTreeMap::new(),
            patterns: Vec::new(),
        }
    }
}
