//! HTML document detection.

use crate::constants::{REGEXPS, TEXT_HTML};

/// Classify a prefix as HTML.
///
/// Matches `<!DOCTYPE HTML` or `<HTML` in any ASCII case, as long as a `>`
/// follows somewhere later in the prefix.
///
/// ## Example
///
/// ```rust
/// use docsniff::html;
///
/// assert_eq!(html::classify("<!DOCTYPE html>"), Some("text/html"));
/// assert_eq!(html::classify("<div>test</div>"), None);
/// ```
pub fn classify(prefix: &str) -> Option<&'static str> {
    let found = REGEXPS.html_doctype.is_match(prefix) || REGEXPS.html_tag.is_match(prefix);
    found.then_some(TEXT_HTML)
}
