//! # Prompt Shortener
//!
//! A URL-shortening redirect service for text prompts, built with Axum and
//! Redis. Clients POST a prompt, receive a 6-character short code, and
//! resolving `/s/<code>` redirects to the site root with the prompt embedded
//! as a query parameter.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The key-value store trait
//! - **Application Layer** ([`application`]) - Link creation/resolution and rate limiting
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; omit to run against an in-memory store
//! export REDIS_URL="redis://localhost:6379"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Storage Layout
//!
//! Two record types share the key-value store, disambiguated by key shape:
//! 6-character short codes (value = prompt text, permanent) and
//! `rate_limit:<clientId>` counters (decimal string, 1-hour TTL).
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, RateLimitService};
    pub use crate::domain::store::{KeyValueStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
