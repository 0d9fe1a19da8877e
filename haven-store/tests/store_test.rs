//! Integration tests: document CRUD, the unprocessed scan, and
//! consumption markers.

use chrono::{TimeZone, Utc};
use haven_core::models::*;
use haven_core::traits::IDocumentStore;
use haven_store::StoreEngine;

fn make_entry(id: &str, tenant: &str, original: &str, corrected: &str) -> CorrectionFeedbackEntry {
    CorrectionFeedbackEntry {
        id: id.to_string(),
        tenant_id: tenant.to_string(),
        original_category: original.to_string(),
        corrected_category: corrected.to_string(),
        processed: false,
        processed_at: None,
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn scan_returns_only_unprocessed() {
    let store = StoreEngine::open_in_memory().unwrap();
    store
        .put_feedback_entry(&make_entry("fb-1", "family-a", "violence", "none"))
        .unwrap();
    let mut consumed = make_entry("fb-2", "family-a", "language", "none");
    consumed.processed = true;
    store.put_feedback_entry(&consumed).unwrap();

    let docs = store.scan_unprocessed_feedback(500).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "fb-1");
}

#[test]
fn scan_respects_limit() {
    let store = StoreEngine::open_in_memory().unwrap();
    for i in 0..10 {
        store
            .put_feedback_entry(&make_entry(&format!("fb-{i}"), "family-a", "violence", "none"))
            .unwrap();
    }
    let docs = store.scan_unprocessed_feedback(3).unwrap();
    assert_eq!(docs.len(), 3);
}

#[test]
fn mark_processed_updates_column_and_body() {
    let store = StoreEngine::open_in_memory().unwrap();
    store
        .put_feedback_entry(&make_entry("fb-1", "family-a", "violence", "none"))
        .unwrap();

    let now = Utc.with_ymd_and_hms(2026, 8, 2, 6, 0, 0).unwrap();
    store
        .mark_feedback_processed("family-a", &["fb-1".to_string()], now)
        .unwrap();

    // Gone from the unprocessed scan.
    assert!(store.scan_unprocessed_feedback(500).unwrap().is_empty());
}

#[test]
fn mark_processed_ignores_other_tenants_entries() {
    let store = StoreEngine::open_in_memory().unwrap();
    store
        .put_feedback_entry(&make_entry("fb-1", "family-a", "violence", "none"))
        .unwrap();

    // Wrong tenant id: the entry must stay unprocessed.
    store
        .mark_feedback_processed("family-b", &["fb-1".to_string()], Utc::now())
        .unwrap();
    assert_eq!(store.scan_unprocessed_feedback(500).unwrap().len(), 1);
}

#[test]
fn ledger_write_is_full_overwrite() {
    let store = StoreEngine::open_in_memory().unwrap();
    let now = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();

    let mut first = FamilyBiasWeights::empty("family-a", now);
    first.total_corrections = 3;
    first.patterns.push(CorrectionPattern {
        original_category: "violence".into(),
        corrected_category: "none".into(),
        count: 3,
        adjustment: haven_core::Adjustment::new(-15),
    });
    store.put_bias_weights(&first).unwrap();

    // Overwrite with a ledger that no longer carries the pattern.
    let second = FamilyBiasWeights::empty("family-a", now);
    store.put_bias_weights(&second).unwrap();

    let raw = store.get_bias_weights("family-a").unwrap().unwrap();
    let decoded: FamilyBiasWeights = serde_json::from_str(&raw.body).unwrap();
    assert_eq!(decoded, second);
    assert!(decoded.patterns.is_empty());
}

#[test]
fn learning_commit_writes_ledger_and_markers_together() {
    let store = StoreEngine::open_in_memory().unwrap();
    store
        .put_feedback_entry(&make_entry("fb-1", "family-a", "violence", "none"))
        .unwrap();
    store
        .put_feedback_entry(&make_entry("fb-2", "family-a", "violence", "none"))
        .unwrap();

    let now = Utc.with_ymd_and_hms(2026, 8, 2, 6, 0, 0).unwrap();
    let ledger = FamilyBiasWeights::empty("family-a", now);
    store
        .commit_tenant_learning(&ledger, &["fb-1".to_string(), "fb-2".to_string()], now)
        .unwrap();

    assert!(store.get_bias_weights("family-a").unwrap().is_some());
    assert!(store.scan_unprocessed_feedback(500).unwrap().is_empty());
}

#[test]
fn missing_ledger_reads_as_none() {
    let store = StoreEngine::open_in_memory().unwrap();
    assert!(store.get_bias_weights("family-unknown").unwrap().is_none());
}

#[test]
fn settings_round_trip() {
    let store = StoreEngine::open_in_memory().unwrap();
    assert!(store.get_tenant_settings("family-a").unwrap().is_none());

    let settings = TenantSettings {
        contribute_to_global_model: Some(false),
    };
    store.put_tenant_settings("family-a", &settings).unwrap();
    let back = store.get_tenant_settings("family-a").unwrap().unwrap();
    assert!(!back.contributes());
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("haven.db");

    {
        let store = StoreEngine::open(&path).unwrap();
        store
            .put_feedback_entry(&make_entry("fb-1", "family-a", "violence", "none"))
            .unwrap();
    }

    let store = StoreEngine::open(&path).unwrap();
    assert_eq!(store.scan_unprocessed_feedback(500).unwrap().len(), 1);
}
