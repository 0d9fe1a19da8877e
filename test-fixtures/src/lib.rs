//! Shared builders for integration tests: feedback entries, tenants,
//! and seeded in-memory stores.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use haven_core::models::{CorrectionFeedbackEntry, TenantRecord, TenantSettings};
use haven_core::traits::IDocumentStore;
use haven_store::StoreEngine;

/// A fixed instant inside the 2026-08 reporting period.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap()
}

/// Fresh in-memory store.
pub fn store() -> Arc<StoreEngine> {
    Arc::new(StoreEngine::open_in_memory().expect("in-memory store"))
}

/// Build an unprocessed feedback entry with a random id.
pub fn feedback_entry(tenant: &str, original: &str, corrected: &str) -> CorrectionFeedbackEntry {
    CorrectionFeedbackEntry {
        id: uuid::Uuid::new_v4().to_string(),
        tenant_id: tenant.to_string(),
        original_category: original.to_string(),
        corrected_category: corrected.to_string(),
        processed: false,
        processed_at: None,
        created_at: fixed_now(),
    }
}

/// Register a tenant record.
pub fn seed_tenant(store: &dyn IDocumentStore, tenant_id: &str) {
    store
        .put_tenant(&TenantRecord {
            tenant_id: tenant_id.to_string(),
            created_at: fixed_now(),
        })
        .expect("put tenant");
}

/// Insert `count` identical unprocessed corrections for a tenant.
pub fn seed_feedback(
    store: &dyn IDocumentStore,
    tenant: &str,
    original: &str,
    corrected: &str,
    count: usize,
) {
    for _ in 0..count {
        store
            .put_feedback_entry(&feedback_entry(tenant, original, corrected))
            .expect("put feedback entry");
    }
}

/// Record an explicit opt-out (or opt-in) of the global model.
pub fn set_contribution(store: &dyn IDocumentStore, tenant_id: &str, contribute: bool) {
    store
        .put_tenant_settings(
            tenant_id,
            &TenantSettings {
                contribute_to_global_model: Some(contribute),
            },
        )
        .expect("put tenant settings");
}
