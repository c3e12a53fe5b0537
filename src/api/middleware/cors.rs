//! CORS middleware.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer applied to all routes.
///
/// Sends `Access-Control-Allow-Origin: *`,
/// `Access-Control-Allow-Methods: GET, POST, OPTIONS`, and
/// `Access-Control-Allow-Headers: Content-Type`, and answers `OPTIONS`
/// preflight requests with an empty 200.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
