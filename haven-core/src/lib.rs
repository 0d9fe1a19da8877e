//! # haven-core
//!
//! Foundation crate for the Haven feedback-driven bias adjustment engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod adjustment;
pub mod anonymize;
pub mod batch;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod period;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use adjustment::Adjustment;
pub use errors::{HavenError, HavenResult};
pub use models::{
    CorrectionFeedbackEntry, CorrectionPattern, FamilyBiasWeights, GlobalModelMetrics,
    GlobalPatternAggregation,
};
pub use period::ReportingPeriod;
