//! Key-value store trait backing short links and rate-limit counters.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Abstraction over the external key-value store.
///
/// Two record types share this key space, disambiguated by key shape only:
/// 6-character short codes (value = prompt text, no TTL) and
/// `rate_limit:<client>` counters (value = decimal string, 1h TTL).
///
/// The store is eventually consistent and offers no cross-key transactions;
/// callers must tolerate check-then-act races.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed production store
/// - [`crate::infrastructure::store::MemoryStore`] - In-memory store for tests and dev
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieves the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists and has not expired
    /// - `Ok(None)` if the key is absent
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend is unreachable or the read fails.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any existing value.
    ///
    /// # Arguments
    ///
    /// - `ttl` - when `Some`, the key expires after the given duration;
    ///   when `None`, the key is permanent
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend is unreachable or the write fails.
    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()>;

    /// Checks if the store backend is healthy.
    ///
    /// Used by the health check endpoint to report store status.
    async fn health_check(&self) -> bool;
}
