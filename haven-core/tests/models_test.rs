//! Serialization contracts for the persisted document models.

use chrono::{TimeZone, Utc};
use haven_core::adjustment::Adjustment;
use haven_core::models::*;
use haven_core::period::ReportingPeriod;

fn sample_ledger() -> FamilyBiasWeights {
    let now = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
    let mut ledger = FamilyBiasWeights::empty("family-1", now);
    ledger.total_corrections = 3;
    ledger.patterns.push(CorrectionPattern {
        original_category: "violence".into(),
        corrected_category: "none".into(),
        count: 3,
        adjustment: Adjustment::new(-15),
    });
    ledger
        .category_adjustments
        .insert("violence".into(), Adjustment::new(-15));
    ledger
}

#[test]
fn feedback_entry_uses_camel_case_fields() {
    let entry = CorrectionFeedbackEntry {
        id: "fb-1".into(),
        tenant_id: "family-1".into(),
        original_category: "violence".into(),
        corrected_category: "none".into(),
        processed: false,
        processed_at: None,
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert!(json.get("tenantId").is_some());
    assert!(json.get("originalCategory").is_some());
    assert!(json.get("processedAt").is_some());
}

#[test]
fn ledger_round_trips_through_json() {
    let ledger = sample_ledger();
    let json = serde_json::to_string(&ledger).unwrap();
    let back: FamilyBiasWeights = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ledger);
}

#[test]
fn adjustment_serializes_as_bare_integer() {
    let json = serde_json::to_string(&Adjustment::new(-15)).unwrap();
    assert_eq!(json, "-15");
}

#[test]
fn out_of_range_adjustment_clamps_on_decode() {
    let a: Adjustment = serde_json::from_str("-120").unwrap();
    assert_eq!(a.value(), -50);
}

#[test]
fn ledger_with_out_of_range_adjustment_decodes_clamped() {
    // A corrupted or externally written ledger must never carry an
    // out-of-range value past the decode boundary.
    let body = r#"{
        "tenantId": "family-1",
        "totalCorrections": 24,
        "lastUpdated": "2026-08-01T00:00:00Z",
        "categoryAdjustments": { "violence": -120 },
        "patterns": [{
            "originalCategory": "violence",
            "correctedCategory": "none",
            "count": 24,
            "adjustment": -120
        }]
    }"#;
    let ledger: FamilyBiasWeights = serde_json::from_str(body).unwrap();
    assert_eq!(ledger.category_adjustments["violence"].value(), -50);
    assert_eq!(ledger.patterns[0].adjustment.value(), -50);
}

#[test]
fn aggregation_document_id_is_deterministic() {
    let period = ReportingPeriod { year: 2026, month: 8 };
    let id = GlobalPatternAggregation::document_id(&period, "violence", "none");
    assert_eq!(id, "2026-08_violence_to_none");
}

#[test]
fn tenant_settings_default_participates() {
    let settings = TenantSettings::default();
    assert!(settings.contributes());

    let opted_out = TenantSettings {
        contribute_to_global_model: Some(false),
    };
    assert!(!opted_out.contributes());

    let explicit_yes = TenantSettings {
        contribute_to_global_model: Some(true),
    };
    assert!(explicit_yes.contributes());
}

#[test]
fn settings_decode_with_missing_field() {
    let settings: TenantSettings = serde_json::from_str("{}").unwrap();
    assert!(settings.contributes());
}
