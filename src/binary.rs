//! Binary content detection.
//!
//! A heuristic, not a format sniffer: text documents practically never carry
//! C0 control characters other than whitespace and ESC, so finding one in the
//! prefix is taken as proof the body is binary.

use crate::constants::APPLICATION_OCTET_STREAM;

/// Control code points that never appear in text.
///
/// TAB, LF, FF, CR (9, 10, 12, 13) and ESC (27) are allowed.
fn is_binary_code_point(c: char) -> bool {
    matches!(c as u32, 0..=8 | 11 | 14..=26 | 28..=31)
}

/// Classify a prefix as binary content.
///
/// ## Example
///
/// ```rust
/// use docsniff::binary;
///
/// assert_eq!(binary::classify("GIF89a\u{1}\u{0}"), Some("application/octet-stream"));
/// assert_eq!(binary::classify("plain\ttext\r\n"), None);
/// ```
pub fn classify(prefix: &str) -> Option<&'static str> {
    prefix
        .chars()
        .any(is_binary_code_point)
        .then_some(APPLICATION_OCTET_STREAM)
}
