//! MIME type names and compiled signature patterns.

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of characters inspected by default.
///
/// WHATWG reads the first 512 bytes of a response; since the whole body is
/// already in memory, twice that is taken.
pub const DEFAULT_PREFIX_LEN: usize = 1024;

pub const TEXT_HTML: &str = "text/html";
pub const TEXT_XML: &str = "text/xml";
pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_XML: &str = "application/xml";
pub const APPLICATION_RSS_XML: &str = "application/rss+xml";
pub const APPLICATION_ATOM_XML: &str = "application/atom+xml";
pub const APPLICATION_RDF_XML: &str = "application/rdf+xml";
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

/// Suffix shared by every structured XML media type.
pub(crate) const XML_SUFFIX: &str = "+xml";

/// Signature patterns used by the classifiers.
///
/// Tag literals sit in `(?i-u:...)` groups so case folding stays ASCII-only;
/// the trailing `.*?>` runs in Unicode mode with `s` so it spans newlines.
pub(crate) struct Regexps {
    pub comment: Regex,
    pub html_doctype: Regex,
    pub html_tag: Regex,
    pub xml_declaration: Regex,
    pub rss: Regex,
    pub atom: Regex,
    pub rdf: Regex,
}

fn signature(tag: &str) -> Regex {
    Regex::new(&format!("(?s)(?i-u:{}).*?>", regex::escape(tag)))
        .expect("signature pattern is valid")
}

pub(crate) static REGEXPS: Lazy<Regexps> = Lazy::new(|| Regexps {
    comment: Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"),
    html_doctype: signature("<!DOCTYPE HTML"),
    html_tag: signature("<HTML"),
    xml_declaration: signature("<?xml"),
    rss: signature("<rss"),
    atom: signature("<feed"),
    rdf: signature("<rdf:RDF"),
});
