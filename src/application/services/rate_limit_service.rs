//! Per-client creation rate limiting backed by the key-value store.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::store::KeyValueStore;
use crate::error::AppError;

/// Key namespace for rate-limit counters.
const RATE_LIMIT_PREFIX: &str = "rate_limit";

/// Bounds short-URL creation requests per client within a sliding window.
///
/// The counter lives in the shared store under `rate_limit:<clientId>` with
/// a TTL. Every accepted request rewrites the counter with a fresh TTL, so
/// the window slides: a steady trickle of requests extends it indefinitely.
/// This is a sliding-expiry approximation of rate limiting, not a fixed
/// window. The read-modify-write is not atomic, so the threshold is
/// approximate under concurrent load from the same client.
pub struct RateLimitService {
    store: Arc<dyn KeyValueStore>,
    max_requests: u32,
    window: Duration,
}

impl RateLimitService {
    /// Creates a rate limiter allowing `max_requests` per `window` per client.
    pub fn new(store: Arc<dyn KeyValueStore>, max_requests: u32, window: Duration) -> Self {
        Self {
            store,
            max_requests,
            window,
        }
    }

    /// Records one request from `client_id`, rejecting it if the client has
    /// exhausted its window quota.
    ///
    /// A missing or unparseable counter is treated as zero. Rejected requests
    /// do not increment the counter (and therefore do not refresh the TTL).
    ///
    /// # Errors
    ///
    /// - [`AppError::RateLimited`] when the counter has reached the threshold
    /// - [`AppError::Internal`] when a store round trip fails
    pub async fn check_and_increment(&self, client_id: &str) -> Result<(), AppError> {
        let key = format!("{}:{}", RATE_LIMIT_PREFIX, client_id);

        let count: u32 = self
            .store
            .get(&key)
            .await?
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        if count >= self.max_requests {
            tracing::debug!("Rate limit hit for {} ({} requests)", client_id, count);
            return Err(AppError::RateLimited);
        }

        self.store
            .put(&key, &(count + 1).to_string(), Some(self.window))
            .await?;

        Ok(())
    }
}
