use haven_core::errors::*;

#[test]
fn batch_limit_error_carries_sizes() {
    let err = StoreError::BatchLimitExceeded { ops: 501, limit: 500 };
    let msg = err.to_string();
    assert!(msg.contains("501"));
    assert!(msg.contains("500"));
}

#[test]
fn decode_error_carries_doc_id_and_reason() {
    let err = ValidationError::Decode {
        doc_id: "fb-123".into(),
        reason: "missing field `tenantId`".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("fb-123"));
    assert!(msg.contains("tenantId"));
}

#[test]
fn tenant_processing_error_carries_anonymous_label() {
    let err = HavenError::TenantProcessing {
        tenant: "fam_0000abcd".into(),
        reason: "ledger write failed".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("fam_0000abcd"));
    assert!(!msg.contains("family-"));
}

// --- From impls ---

#[test]
fn store_error_converts_to_haven_error() {
    let store_err = StoreError::SqliteError {
        message: "disk full".into(),
    };
    let haven_err: HavenError = store_err.into();
    assert!(matches!(haven_err, HavenError::Store(_)));
    assert!(haven_err.to_string().contains("disk full"));
}

#[test]
fn validation_error_converts_to_haven_error() {
    let v_err = ValidationError::MissingField {
        doc_id: "doc-1".into(),
        field: "originalCategory".into(),
    };
    let haven_err: HavenError = v_err.into();
    assert!(matches!(haven_err, HavenError::Validation(_)));
}
