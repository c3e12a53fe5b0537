//! Key-value store implementations.
//!
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-memory store for tests and Redis-less development

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
