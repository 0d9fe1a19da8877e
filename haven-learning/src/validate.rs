//! Typed decode of persisted documents.
//!
//! A document that fails decode becomes a skip-with-reason value. Skipped
//! feedback stays unprocessed and is revisited next run; a deterministic
//! decode failure therefore skips the entry permanently, an accepted
//! tradeoff over poisoning the whole batch.

use haven_core::errors::ValidationError;
use haven_core::models::{CorrectionFeedbackEntry, FamilyBiasWeights};
use haven_core::traits::RawDocument;

/// Decode a feedback entry, rejecting structurally valid documents with
/// blank identity or category fields.
pub fn decode_feedback_entry(
    doc: &RawDocument,
) -> Result<CorrectionFeedbackEntry, ValidationError> {
    let entry: CorrectionFeedbackEntry =
        serde_json::from_str(&doc.body).map_err(|e| ValidationError::Decode {
            doc_id: doc.id.clone(),
            reason: e.to_string(),
        })?;

    for (field, value) in [
        ("tenantId", &entry.tenant_id),
        ("originalCategory", &entry.original_category),
        ("correctedCategory", &entry.corrected_category),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField {
                doc_id: doc.id.clone(),
                field: field.to_string(),
            });
        }
    }

    Ok(entry)
}

/// Decode a tenant's bias ledger.
pub fn decode_bias_weights(doc: &RawDocument) -> Result<FamilyBiasWeights, ValidationError> {
    serde_json::from_str(&doc.body).map_err(|e| ValidationError::Decode {
        doc_id: doc.id.clone(),
        reason: e.to_string(),
    })
}
