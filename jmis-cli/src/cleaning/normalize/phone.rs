//! Phone number normalization

/// Significant digits of a Kenyan subscriber number
pub const SUBSCRIBER_DIGITS: usize = 9;

/// Calling code used when nothing else is configured
pub const DEFAULT_PHONE_PREFIX: &str = "+254";

/// Normalize a phone number to `<prefix><9 digits>`
///
/// Every non-digit is stripped. With at least nine digits left, the last nine
/// are kept and prefixed; shorter digit strings are returned as they are.
pub fn normalize_phone(raw: Option<&str>, prefix: &str) -> String {
    let digits: String = raw
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if digits.len() >= SUBSCRIBER_DIGITS {
        format!("{}{}", prefix, &digits[digits.len() - SUBSCRIBER_DIGITS..])
    } else {
        digits
    }
}
