//! Tracing subscriber setup for the job host.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber. Call once from the host
/// process; repeated calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
