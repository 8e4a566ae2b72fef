//! Property-based tests using proptest
//!
//! The sniffer is total over arbitrary strings; these tests throw random and
//! markup-shaped input at every public operation and check the invariants
//! that must hold for all of it.

use proptest::prelude::*;

use docsniff::{
    binary, extract, extract_with_limit, html, normalize, sniff, sniff_bytes, xml,
    APPLICATION_ATOM_XML, APPLICATION_OCTET_STREAM, APPLICATION_RDF_XML, APPLICATION_RSS_XML,
    DEFAULT_PREFIX_LEN, TEXT_HTML, TEXT_XML,
};

/// Strategy for content-type-like header values
fn content_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,10}/[a-z+.-]{1,15}",
        "[a-z]{1,10}/[a-z+.-]{1,15}; ?charset=[A-Za-z0-9-]{1,10}",
        "charset=[A-Za-z0-9-]{1,10}; ?[a-z]{1,10}/[a-z]{1,10}",
        "[ \t;/a-z=]{0,30}",
        any::<String>(),
    ]
}

/// Strategy for bodies made of markup fragments the classifiers look for
fn markup_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("<".to_string()),
        Just(">".to_string()),
        Just("<?".to_string()),
        Just("<!--".to_string()),
        Just("-->".to_string()),
        Just("<?xml".to_string()),
        Just("<html".to_string()),
        Just("<!DOCTYPE html".to_string()),
        Just("<rss".to_string()),
        Just("<feed".to_string()),
        Just("<rdf:RDF".to_string()),
        "[a-zA-Z \n\t]{0,20}",
        "[\\x00-\\x1f]",
    ];
    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

fn body_strategy() -> impl Strategy<Value = String> {
    prop_oneof![markup_strategy(), any::<String>(), ".{0,3000}"]
}

proptest! {
    /// Normalizing twice gives the same result as normalizing once
    #[test]
    fn normalize_is_idempotent(s in content_type_strategy()) {
        let once = normalize(Some(s.as_str()));
        prop_assert_eq!(normalize(Some(once)), once);
    }

    /// Normalized types never carry surrounding whitespace
    #[test]
    fn normalize_is_trimmed(s in content_type_strategy()) {
        let normalized = normalize(Some(s.as_str()));
        prop_assert_eq!(normalized, normalized.trim());
    }

    /// The prefix never exceeds its character budget
    #[test]
    fn extract_is_bounded(body in body_strategy(), limit in 0usize..2048) {
        prop_assert!(extract(Some(body.as_str())).chars().count() <= DEFAULT_PREFIX_LEN);
        prop_assert!(extract_with_limit(Some(body.as_str()), limit).chars().count() <= limit);
    }

    /// Short bodies without comment markers pass through untouched
    #[test]
    fn extract_keeps_short_plain_bodies(body in "[^<]{0,1024}") {
        prop_assert_eq!(extract(Some(body.as_str())), body.as_str());
    }

    /// Each classifier yields its own fixed types or nothing
    #[test]
    fn classifiers_are_total(prefix in body_strategy()) {
        let html_result = html::classify(&prefix);
        prop_assert!(html_result.is_none() || html_result == Some(TEXT_HTML));

        let xml_result = xml::classify(&prefix);
        prop_assert!(matches!(
            xml_result,
            None | Some(TEXT_XML)
                | Some(APPLICATION_RSS_XML)
                | Some(APPLICATION_ATOM_XML)
                | Some(APPLICATION_RDF_XML)
        ));

        let binary_result = binary::classify(&prefix);
        prop_assert!(binary_result.is_none() || binary_result == Some(APPLICATION_OCTET_STREAM));
    }

    /// RSS is chosen whenever both feed signatures follow a declaration
    #[test]
    fn rss_beats_atom(filler in "[a-z ]{0,50}", rss_first in any::<bool>()) {
        let (first, second) = if rss_first { ("<rss>", "<feed>") } else { ("<feed>", "<rss>") };
        let prefix = format!("<?xml version=\"1.0\"?>{filler}{first}{filler}{second}");
        prop_assert_eq!(xml::classify(&prefix), Some(APPLICATION_RSS_XML));
    }

    /// The result is never empty, whatever goes in
    #[test]
    fn sniff_is_never_empty(
        declared in proptest::option::of(content_type_strategy()),
        body in proptest::option::of(body_strategy()),
    ) {
        let result = sniff(declared.as_deref(), body.as_deref());
        prop_assert!(!result.is_empty());
    }

    /// Byte bodies are handled like their lossy text decoding
    #[test]
    fn sniff_bytes_matches_lossy_text(
        declared in proptest::option::of(content_type_strategy()),
        bytes in prop::collection::vec(any::<u8>(), 0..5000),
    ) {
        let text = String::from_utf8_lossy(&bytes);
        prop_assert_eq!(
            sniff_bytes(declared.as_deref(), Some(bytes.as_slice())),
            sniff(declared.as_deref(), Some(&*text))
        );
    }

    /// A declared type other than html is returned as normalized
    #[test]
    fn non_html_declared_types_are_trusted(
        declared in "[a-z]{1,10}/[a-z+.-]{1,15}",
        body in body_strategy(),
    ) {
        prop_assume!(declared != TEXT_HTML);
        prop_assert_eq!(sniff(Some(declared.as_str()), Some(body.as_str())), declared);
    }
}
