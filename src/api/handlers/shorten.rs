//! Handler for the short URL creation endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::HeaderMap,
};
use serde_json::Value;

use crate::api::dto::shorten::ShortenResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::extract_client_id;

/// Maximum accepted prompt length in characters.
const MAX_PROMPT_CHARS: usize = 16_000;

/// Creates a short URL for a prompt.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "prompt": "How do I use ChatGPT?" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortCode": "aB3xY9", "shortUrl": "https://lmctfy.ai/s/aB3xY9" }
/// ```
///
/// # Request Flow
///
/// 1. Rate-limit check and increment for the client (429 on exhaustion).
///    This runs before validation, so invalid requests still consume quota.
/// 2. Body parsed as JSON; `prompt` must be present and a string (400).
/// 3. Prompt length capped at 16,000 characters (400).
/// 4. Control characters stripped, code allocated, record stored (500 on
///    store failure).
///
/// # Errors
///
/// - 400 `{"error":"Invalid prompt"}` / `{"error":"Prompt too long"}`
/// - 429 `{"error":"Rate limit exceeded"}`
/// - 500 `{"error":"Failed to create short URL"}`
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let client_id = extract_client_id(&headers);
    state.rate_limiter.check_and_increment(&client_id).await?;

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Unparseable shorten request body: {}", e);
        AppError::internal("Failed to create short URL")
    })?;

    let prompt = match payload.get("prompt") {
        Some(Value::String(prompt)) => prompt,
        _ => return Err(AppError::bad_request("Invalid prompt")),
    };

    if prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err(AppError::bad_request("Prompt too long"));
    }

    let code = state.link_service.create_prompt_link(prompt).await?;
    let short_url = state.link_service.short_url(&state.base_url, &code);

    Ok(Json(ShortenResponse {
        short_code: code,
        short_url,
    }))
}
