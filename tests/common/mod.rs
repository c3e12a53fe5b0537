#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use prompt_shortener::application::services::RateLimitService;
use prompt_shortener::infrastructure::store::MemoryStore;
use prompt_shortener::routes::router;
use prompt_shortener::state::AppState;

pub const BASE_URL: &str = "https://lmctfy.ai";

/// Builds an application state over a fresh in-memory store.
///
/// Returns the store handle alongside the state so tests can inspect
/// what was (or was not) written.
pub fn create_test_state(rate_limit_max: u32) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());

    let rate_limiter = Arc::new(RateLimitService::new(
        store.clone(),
        rate_limit_max,
        Duration::from_secs(3600),
    ));

    let state = AppState::new(store.clone(), rate_limiter, BASE_URL.to_string());

    (state, store)
}

/// Builds a test server over the full application router.
pub fn test_app(rate_limit_max: u32) -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state(rate_limit_max);
    let server = TestServer::new(router(state)).unwrap();
    (server, store)
}
