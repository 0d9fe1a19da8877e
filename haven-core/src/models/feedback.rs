use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One human correction of the classifier's output.
///
/// Owned by the annotation flow; the learner only ever flips `processed`
/// and stamps `processed_at`. Entries are never deleted so the audit
/// trail survives consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionFeedbackEntry {
    /// Document id of the entry.
    pub id: String,
    /// Tenant the correction belongs to.
    pub tenant_id: String,
    /// Category the classifier predicted.
    pub original_category: String,
    /// Category the human corrected it to.
    pub corrected_category: String,
    /// Consumption marker: true once a learner run has folded this entry
    /// into the tenant's ledger.
    pub processed: bool,
    /// When the entry was consumed, if it has been.
    pub processed_at: Option<DateTime<Utc>>,
    /// When the correction was recorded.
    pub created_at: DateTime<Utc>,
}
