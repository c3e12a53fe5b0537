use std::sync::Arc;

use crate::application::services::{LinkService, RateLimitService};
use crate::domain::store::KeyValueStore;

/// Shared application state injected into all handlers.
///
/// All mutable state lives in the external key-value store; this struct only
/// carries handles, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub rate_limiter: Arc<RateLimitService>,
    pub store: Arc<dyn KeyValueStore>,
    pub base_url: String,
}

impl AppState {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        rate_limiter: Arc<RateLimitService>,
        base_url: String,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store.clone())),
            rate_limiter,
            store,
            base_url,
        }
    }
}
