//! # haven-learning
//!
//! Family Bias Learner: scans unprocessed correction feedback across all
//! tenants, folds it into each tenant's bias ledger (bounded per-category
//! adjustments plus a pattern-count history), and marks the input consumed.

pub mod engine;
pub mod merge;
pub mod validate;

pub use engine::BiasLearner;
