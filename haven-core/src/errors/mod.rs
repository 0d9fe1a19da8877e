//! Error taxonomy: validation (skip), per-entity (catch and continue),
//! run-level (propagate to the scheduler's retry policy).

mod store_error;
mod validation_error;

pub use store_error::StoreError;
pub use validation_error::ValidationError;

/// Top-level error for the Haven bias engine.
#[derive(Debug, thiserror::Error)]
pub enum HavenError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A single tenant's processing failed. Carries the anonymized
    /// tenant label, never the raw id.
    #[error("tenant {tenant} processing failed: {reason}")]
    TenantProcessing { tenant: String, reason: String },
}

pub type HavenResult<T> = Result<T, HavenError>;
