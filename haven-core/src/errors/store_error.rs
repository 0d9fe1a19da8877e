/// Storage-layer errors for document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed: {reason}")]
    MigrationFailed { reason: String },

    #[error("write batch of {ops} operations exceeds the {limit}-op limit")]
    BatchLimitExceeded { ops: usize, limit: usize },

    #[error("connection mutex poisoned by a panicking writer")]
    PoolPoisoned,
}
