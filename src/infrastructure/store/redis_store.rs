//! Redis-backed key-value store implementation.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::store::{KeyValueStore, StoreError, StoreResult};

/// Redis store backing short links and rate-limit counters.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Unlike a cache, this is primary storage: errors propagate to callers
/// instead of degrading silently.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| StoreError::Operation(format!("Redis GET failed for {}: {}", key, e)))
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()> {
        let mut conn = self.client.clone();

        match ttl {
            Some(ttl) => {
                conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
                    .await
                    .map_err(|e| {
                        StoreError::Operation(format!("Redis SETEX failed for {}: {}", key, e))
                    })?;
                debug!("Store SET: {} (TTL: {}s)", key, ttl.as_secs());
            }
            None => {
                conn.set::<_, _, ()>(key, value).await.map_err(|e| {
                    StoreError::Operation(format!("Redis SET failed for {}: {}", key, e))
                })?;
                debug!("Store SET: {} (permanent)", key);
            }
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
