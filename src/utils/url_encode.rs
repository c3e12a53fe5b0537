//! Query component percent-encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped by JavaScript's `encodeURIComponent`:
/// alphanumerics plus `- _ . ! ~ * ' ( )`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a string for use as a URL query parameter value.
///
/// Matches `encodeURIComponent` semantics so redirect targets decode
/// identically in browsers (spaces become `%20`, never `+`).
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}
