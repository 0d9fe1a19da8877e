//! # haven-store
//!
//! SQLite persistence layer implementing the `IDocumentStore` trait:
//! point reads, filtered scans, keyset tenant pagination, the
//! cross-tenant unprocessed-feedback scan, and atomic write batches
//! capped at the store's hard operation limit.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StoreEngine;

use haven_core::errors::{HavenError, StoreError};

/// Wrap an underlying SQLite failure in the store error type.
pub(crate) fn to_store_err(message: String) -> HavenError {
    StoreError::SqliteError { message }.into()
}
