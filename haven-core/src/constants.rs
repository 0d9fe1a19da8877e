/// Haven system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum unprocessed feedback entries consumed per learner run.
pub const FEEDBACK_BATCH_SIZE: usize = 500;

/// Hard per-batch operation limit enforced by the document store.
pub const WRITE_BATCH_HARD_LIMIT: usize = 500;

/// Chunk size for aggregation writes, one below the hard limit so the
/// final chunk always has room for the metrics document.
pub const WRITE_BATCH_CHUNK_SIZE: usize = 499;

/// Page size for cursor-based tenant pagination.
pub const TENANT_PAGE_SIZE: usize = 500;

/// A global pattern is flagged for review when its total correction
/// count strictly exceeds this threshold.
pub const GLOBAL_PATTERN_REVIEW_THRESHOLD: u64 = 10;

/// Lower bound on any per-category confidence adjustment.
pub const MAX_NEGATIVE_ADJUSTMENT: i32 = -50;

/// Upper bound on any per-category confidence adjustment. The current
/// learner only produces non-positive deltas; the positive headroom is
/// reserved for future confidence boosts.
pub const MAX_POSITIVE_ADJUSTMENT: i32 = 20;

/// Confidence delta contributed by each correction against a category.
pub const BASE_ADJUSTMENT_PER_CORRECTION: i32 = -5;

/// Cap on the estimated accuracy improvement metric (percent).
pub const MAX_ESTIMATED_IMPROVEMENT: f64 = 5.0;
