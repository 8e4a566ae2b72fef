//! XML document and feed detection.
//!
//! A prefix is XML when it carries an `<?xml ...>` declaration. Declared XML
//! is then narrowed to a feed type by its root element, checked in a fixed
//! order: RSS, then Atom, then RDF. The first hit wins even if a later
//! signature is also present.

use crate::constants::{
    Regexps, APPLICATION_ATOM_XML, APPLICATION_RDF_XML, APPLICATION_RSS_XML, REGEXPS, TEXT_XML,
};
use regex::Regex;

/// Feed signatures in priority order.
fn feed_signatures(regexps: &Regexps) -> [(&Regex, &'static str); 3] {
    [
        (&regexps.rss, APPLICATION_RSS_XML),
        (&regexps.atom, APPLICATION_ATOM_XML),
        (&regexps.rdf, APPLICATION_RDF_XML),
    ]
}

/// Classify a prefix as an XML document.
///
/// Returns `None` without an XML declaration; otherwise the feed type of the
/// first matching root signature, or `text/xml` when none match.
///
/// ## Example
///
/// ```rust
/// use docsniff::xml;
///
/// let rss = r#"<?xml version="1.0" encoding="UTF-8" ?><rss></rss>"#;
/// assert_eq!(xml::classify(rss), Some("application/rss+xml"));
/// assert_eq!(xml::classify("<html></html>"), None);
/// ```
pub fn classify(prefix: &str) -> Option<&'static str> {
    if !REGEXPS.xml_declaration.is_match(prefix) {
        return None;
    }

    let mime_type = feed_signatures(&REGEXPS)
        .into_iter()
        .find(|(signature, _)| signature.is_match(prefix))
        .map_or(TEXT_XML, |(_, mime_type)| mime_type);

    Some(mime_type)
}
