//! # haven-jobs
//!
//! Zero-payload entry points for the two scheduled batch jobs. The
//! external timer invokes these; a returned error is the signal for its
//! retry policy. No payload, no cross-invocation state.

pub mod schedule;
pub mod telemetry;

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use haven_aggregation::PatternAggregator;
use haven_core::errors::HavenResult;
use haven_core::models::{AggregationRunSummary, LearnerRunSummary};
use haven_core::traits::IDocumentStore;
use haven_learning::BiasLearner;

/// Entry point for the 6-hourly bias learner job.
pub fn run_bias_learner(store: Arc<dyn IDocumentStore>) -> HavenResult<LearnerRunSummary> {
    info!("bias learner job triggered");
    BiasLearner::new(store).run(Utc::now())
}

/// Entry point for the monthly global aggregation job.
pub fn run_global_aggregation(
    store: Arc<dyn IDocumentStore>,
) -> HavenResult<AggregationRunSummary> {
    info!("global aggregation job triggered");
    PatternAggregator::new(store).run(Utc::now())
}
