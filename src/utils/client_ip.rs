//! Client identifier extraction from HTTP request headers.

use axum::http::HeaderMap;

/// Bucket used when no client-identifying header is present.
///
/// All such requests share one global rate-limit counter. This is a
/// deliberate policy choice, not an oversight.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Extracts a client identifier for rate limiting.
///
/// Checks `CF-Connecting-IP` first (set by the edge proxy), then the first
/// entry of `X-Forwarded-For`, and falls back to [`UNKNOWN_CLIENT`] when
/// neither header carries a usable value.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("cf-connecting-ip", "203.0.113.9".parse().unwrap());
///
/// assert_eq!(extract_client_id(&headers), "203.0.113.9");
/// ```
pub fn extract_client_id(headers: &HeaderMap) -> String {
    if let Some(ip) = headers
        .get("cf-connecting-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return ip.to_string();
    }

    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        // X-Forwarded-For lists client first, proxies after.
        if let Some(first) = forwarded.split(',').next().map(str::trim)
            && !first.is_empty()
        {
            return first.to_string();
        }
    }

    UNKNOWN_CLIENT.to_string()
}
