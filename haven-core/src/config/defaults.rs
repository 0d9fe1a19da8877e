//! Default values shared between config structs and constants.

use crate::constants;

pub const DEFAULT_FEEDBACK_BATCH_SIZE: usize = constants::FEEDBACK_BATCH_SIZE;
pub const DEFAULT_TENANT_PAGE_SIZE: usize = constants::TENANT_PAGE_SIZE;
pub const DEFAULT_REVIEW_THRESHOLD: u64 = constants::GLOBAL_PATTERN_REVIEW_THRESHOLD;
pub const DEFAULT_LEARNER_INTERVAL_SECS: u64 = 6 * 60 * 60;
