//! Engine configuration structs with constant-backed defaults.

pub mod defaults;

mod aggregation_config;
mod learner_config;

pub use aggregation_config::AggregationConfig;
pub use learner_config::LearnerConfig;
