//! Handler for short URL resolution.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_encode::encode_query_component;

/// Resolves a short code and redirects to the prompt URL.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Behavior
///
/// - Known code: 302 to `<base>/?q=<encoded prompt>`, with `&preview=1`
///   appended when the inbound request carried a `preview` query parameter
///   (presence is what matters, not its value).
/// - Unknown code: 302 to the site root. Unresolvable codes are never
///   surfaced as 4xx to the end user.
///
/// Resolution is a pure read; no store state is mutated.
pub async fn redirect_handler(
    Path(code): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if code.is_empty() {
        return Ok(found(&root_url(&state.base_url)));
    }

    let Some(prompt) = state.link_service.resolve(&code).await? else {
        debug!("Unknown short code {}, redirecting to root", code);
        return Ok(found(&root_url(&state.base_url)));
    };

    let mut target = format!(
        "{}/?q={}",
        state.base_url.trim_end_matches('/'),
        encode_query_component(&prompt)
    );
    if params.contains_key("preview") {
        target.push_str("&preview=1");
    }

    Ok(found(&target))
}

/// Redirects bare `/s` (empty code segment) to the site root.
pub async fn redirect_root_handler(State(state): State<AppState>) -> Response {
    found(&root_url(&state.base_url))
}

fn root_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}

/// Builds a 302 Found redirect.
///
/// Axum's `Redirect` helpers only offer 303/307/308; the client contract
/// requires 302.
fn found(target: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, target.to_string())]).into_response()
}
