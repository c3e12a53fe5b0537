//! Short code generation.

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Alphabet used for random short codes.
const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Generates a random 6-character short code.
///
/// Each character is drawn uniformly from the 62-symbol alphanumeric
/// alphabet (lowercase, uppercase, digits).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Generates a time-derived fallback code.
///
/// Used when random generation exhausts its collision-retry budget. The
/// current Unix epoch in milliseconds is rendered in base 36, which gives
/// no uniqueness guarantee under concurrent fallback use.
pub fn fallback_code() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    to_base36(millis)
}

/// Renders a number in base 36 using lowercase digits, like
/// JavaScript's `Number.prototype.toString(36)`.
fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();

    String::from_utf8(buf).expect("base36 digits are ASCII")
}
