//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, state construction, and Axum server lifecycle.

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::application::services::RateLimitService;
use crate::config::Config;
use crate::domain::store::KeyValueStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Key-value store (Redis, or in-memory fallback when unconfigured)
/// - Rate limiter
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if the Redis connection fails when configured, the
/// listen address is invalid, or the server encounters a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn KeyValueStore> = if let Some(redis_url) = &config.redis_url {
        let redis = RedisStore::connect(redis_url).await?;
        tracing::info!("Store: Redis");
        Arc::new(redis)
    } else {
        tracing::warn!("Store: in-memory (data will not survive restarts)");
        Arc::new(MemoryStore::new())
    };

    let rate_limiter = Arc::new(RateLimitService::new(
        store.clone(),
        config.rate_limit_max,
        Duration::from_secs(config.rate_limit_window_secs),
    ));

    let state = AppState::new(store, rate_limiter, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
