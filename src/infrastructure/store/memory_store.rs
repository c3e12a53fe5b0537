//! In-memory key-value store for tests and Redis-less development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::store::{KeyValueStore, StoreResult};

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

/// A process-local store with lazy TTL expiry.
///
/// Expired entries are dropped on read rather than by a background sweeper;
/// memory is only reclaimed for keys that are read again, which is fine for
/// the short-lived processes this store is meant for.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (no Redis configured)");
        Self::default()
    }

    /// Number of stored entries, including not-yet-reaped expired ones.
    ///
    /// Used by tests to assert whether an operation wrote to the store.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut entries = self.entries.lock().expect("store lock poisoned");

        let expired = entries
            .get(key)
            .is_some_and(|e| e.expires_at.is_some_and(|t| Instant::now() >= t));

        if expired {
            entries.remove(key);
            return Ok(None);
        }

        Ok(entries.get(key).map(|e| e.value.clone()))
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };

        self.entries
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), entry);

        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
