//! DTOs for the shorten endpoint.

use serde::Serialize;

/// Response for a successfully created short link.
///
/// Field names are camelCase on the wire to match the client contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}
