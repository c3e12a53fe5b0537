//! Prompt sanitization.

/// Strips ASCII control characters (U+0000–U+001F and U+007F) from a prompt.
///
/// Sanitization is silent: offending characters are removed rather than
/// rejected, and the rest of the prompt is kept verbatim.
pub fn strip_control_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'))
        .collect()
}
