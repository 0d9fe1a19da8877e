use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tenant ("family") account record, as visible to the batch jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRecord {
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
}

/// Per-tenant settings consulted by the aggregator.
///
/// An absent preference means the tenant participates; only an explicit
/// `false` opts out of the global model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSettings {
    pub contribute_to_global_model: Option<bool>,
}

impl TenantSettings {
    /// Whether the tenant contributes to global aggregation.
    pub fn contributes(&self) -> bool {
        self.contribute_to_global_model != Some(false)
    }
}

/// One page of a cursor-based tenant scan.
#[derive(Debug, Clone)]
pub struct TenantPage {
    pub tenants: Vec<TenantRecord>,
    /// Cursor for the next page; None when this is the last page.
    pub next_cursor: Option<String>,
}
