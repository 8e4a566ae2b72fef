//! Bounded body prefix extraction.
//!
//! Classifiers never look at a whole body. They see a prefix of at most
//! [`DEFAULT_PREFIX_LEN`] characters with markup comments removed, which keeps
//! the cost of every sniff constant regardless of document size.
//!
//! Truncation happens before comment removal, so a comment that straddles the
//! cut point has no closing `-->` in the prefix and is left in place.

use crate::constants::{DEFAULT_PREFIX_LEN, REGEXPS};
use std::borrow::Cow;

/// Extract the inspectable prefix of a body.
///
/// Equivalent to [`extract_with_limit`] with [`DEFAULT_PREFIX_LEN`].
///
/// ## Example
///
/// ```rust
/// use docsniff::extract;
///
/// assert_eq!(extract(Some("<!--comment-->test")), "test");
/// assert_eq!(extract(None), "");
/// ```
pub fn extract(body: Option<&str>) -> Cow<'_, str> {
    extract_with_limit(body, DEFAULT_PREFIX_LEN)
}

/// Extract at most `limit` characters of `body`, then strip `<!-- ... -->`
/// spans from what was taken.
pub fn extract_with_limit(body: Option<&str>, limit: usize) -> Cow<'_, str> {
    let body = match body {
        Some(body) if !body.is_empty() => body,
        _ => return Cow::Borrowed(""),
    };

    REGEXPS.comment.replace_all(truncate_chars(body, limit), "")
}

/// Longest prefix of `text` holding at most `limit` characters.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
