use serde::{Deserialize, Serialize};

use super::defaults;

/// Family Bias Learner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Maximum unprocessed entries consumed per run.
    pub feedback_batch_size: usize,
    /// Interval between learner runs (seconds); enforced by the
    /// external scheduler, recorded here for the job host.
    pub run_interval_secs: u64,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            feedback_batch_size: defaults::DEFAULT_FEEDBACK_BATCH_SIZE,
            run_interval_secs: defaults::DEFAULT_LEARNER_INTERVAL_SECS,
        }
    }
}
