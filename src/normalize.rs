//! Declared content-type normalization.

/// Normalize a declared content-type.
///
/// Parameters such as `charset` are dropped and surrounding whitespace is
/// trimmed. When the value carries a `;`, the first `;`-separated part that
/// contains a `/` (not at its very start, checked before trimming) is taken as
/// the type, wherever it sits. That tolerates misordered headers like
/// `charset=UTF-8; text/html`.
///
/// Trimming also strips U+FEFF, which some servers leave in front of header
/// values and which `str::trim` keeps.
///
/// Absent and empty inputs both normalize to `""`. No case folding is done.
///
/// ## Example
///
/// ```rust
/// use docsniff::normalize;
///
/// assert_eq!(normalize(Some("text/html; charset=UTF-8")), "text/html");
/// assert_eq!(normalize(Some("charset=UTF-8; text/html")), "text/html");
/// assert_eq!(normalize(None), "");
/// ```
pub fn normalize(content_type: Option<&str>) -> &str {
    let Some(content_type) = content_type else {
        return "";
    };

    // ref: http://www.w3.org/Protocols/rfc1341/4_Content-Type.html
    let selected = match content_type.find(';') {
        Some(pos) if pos > 0 => content_type
            .split(';')
            .find(|part| part.find('/').is_some_and(|slash| slash > 0))
            .unwrap_or(content_type),
        _ => content_type,
    };

    selected.trim_matches(is_trimmable)
}

fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
