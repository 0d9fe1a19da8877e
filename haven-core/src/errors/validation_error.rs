/// Schema-validation errors for persisted documents.
///
/// These are skip-with-reason values: a document that fails typed decode
/// is logged and left alone, never retried within the same run.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("document {doc_id} failed schema validation: {reason}")]
    Decode { doc_id: String, reason: String },

    #[error("document {doc_id} is missing required field {field}")]
    MissingField { doc_id: String, field: String },
}
