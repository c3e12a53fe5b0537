//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shorten`  - Create a short link (rate limited per client)
//! - `GET  /s/{code}`     - Resolve a short code to a 302 redirect
//! - `GET  /s`            - Empty code segment, 302 to site root
//! - `GET  /health`       - Health check: store ping
//! - everything else      - Static assets from `./static`, 404 plain text
//!
//! # Middleware
//!
//! - **CORS** - `*` origin, GET/POST/OPTIONS, Content-Type; answers preflight
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (`/s/` resolves like `/s`)

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api::handlers::{
    health_handler, redirect_handler, redirect_root_handler, shorten_handler,
};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;

/// Constructs the application router without the outer path-normalization
/// wrapper. Used directly by integration tests.
pub fn router(state: AppState) -> Router {
    let api_router = Router::new().route("/shorten", post(shorten_handler));

    let static_files = ServeDir::new("static").not_found_service(not_found.into_service());

    Router::new()
        .route("/s/{code}", get(redirect_handler))
        .route("/s", get(redirect_root_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .fallback_service(static_files)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the full application router served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Plain-text 404 for paths with no route and no static asset.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
