//! Persisted document models and run summaries.

mod aggregation;
mod bias_weights;
mod feedback;
mod metrics;
mod run_summary;
mod tenant;

pub use aggregation::GlobalPatternAggregation;
pub use bias_weights::{CorrectionPattern, FamilyBiasWeights};
pub use feedback::CorrectionFeedbackEntry;
pub use metrics::GlobalModelMetrics;
pub use run_summary::{AggregationRunSummary, LearnerRunSummary};
pub use tenant::{TenantPage, TenantRecord, TenantSettings};
