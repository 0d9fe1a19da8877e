//! # haven-aggregation
//!
//! Global Pattern Aggregator: once per calendar month, folds every
//! participating tenant's bias ledger into anonymized cross-tenant
//! pattern aggregates, flags high-volume patterns for review, and
//! writes a per-period metrics document.

pub mod accumulator;
pub mod engine;
pub mod improvement;

pub use engine::PatternAggregator;
