//! The sniffing decision.
//!
//! This module contains [`Sniffer`], which decides between the declared type
//! and what the body looks like, plus the [`sniff`] and [`sniff_bytes`]
//! shortcuts that run it with default options.
//!
//! ## Decision order
//!
//! 1. No declared type: classify the body prefix as HTML, XML, then binary,
//!    first match wins, falling back to `text/plain`.
//! 2. `application/xml`, `text/xml` or any `+xml` type: trusted.
//! 3. `text/html`: corrected only when the prefix is really XML (XHTML or a
//!    feed served with the wrong header).
//! 4. Anything else: trusted without looking at the body.
//!
//! Declared `text/html` is never checked for binary content, and other
//! declared types are never checked at all.
//!
//! ## Example
//!
//! ```rust
//! use docsniff::sniff;
//!
//! let feed = r#"<?xml version="1.0"?><rss version="2.0"></rss>"#;
//! assert_eq!(sniff(Some("text/html"), Some(feed)), "application/rss+xml");
//! assert_eq!(sniff(None, Some("<html></html>")), "text/html");
//! assert_eq!(sniff(Some("image/png"), None), "image/png");
//! ```

use crate::{
    binary,
    constants::{APPLICATION_XML, TEXT_HTML, TEXT_PLAIN, TEXT_XML, XML_SUFFIX},
    error::Result,
    extract::extract_with_limit,
    html,
    normalize::normalize,
    options::SniffOptions,
    outcome::{SniffOutcome, SniffSource},
    xml,
};
use std::borrow::Cow;
use tracing::{debug, trace};

type Classifier = fn(&str) -> Option<&'static str>;

/// Classifiers tried on bodies without a declared type, in order.
const UNDECLARED_CHAIN: [(&str, Classifier); 3] = [
    ("html", html::classify),
    ("xml", xml::classify),
    ("binary", binary::classify),
];

/// Content-type sniffer.
///
/// Holds validated [`SniffOptions`]. It carries no other state, so one
/// instance can be shared freely between threads.
///
/// ## Example
///
/// ```rust
/// use docsniff::{SniffOptions, Sniffer};
///
/// let options = SniffOptions::builder().prefix_len(4096).build();
/// let sniffer = Sniffer::new(Some(options))?;
///
/// let mut body = " ".repeat(2000);
/// body.push_str("<html></html>");
/// assert_eq!(sniffer.sniff(None, Some(body.as_str())), "text/html");
/// # Ok::<(), docsniff::SniffError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sniffer {
    options: SniffOptions,
}

impl Sniffer {
    /// Create a new Sniffer
    ///
    /// # Arguments
    /// * `options` - Optional configuration options
    ///
    /// # Returns
    /// Result containing the Sniffer or [`SniffError::InvalidOption`](crate::SniffError::InvalidOption)
    pub fn new(options: Option<SniffOptions>) -> Result<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;
        Ok(Self { options })
    }

    /// The options this sniffer runs with
    ///
    /// ```rust
    /// use docsniff::{Sniffer, DEFAULT_PREFIX_LEN};
    ///
    /// let sniffer = Sniffer::new(None).unwrap();
    /// assert_eq!(sniffer.options().prefix_len, DEFAULT_PREFIX_LEN);
    /// ```
    pub fn options(&self) -> &SniffOptions {
        &self.options
    }

    /// Determine the MIME type to trust for a declared type and body.
    pub fn sniff(&self, declared: Option<&str>, body: Option<&str>) -> String {
        self.sniff_outcome(declared, body).mime_type
    }

    /// Like [`Sniffer::sniff`], for bodies that have not been decoded yet.
    pub fn sniff_bytes(&self, declared: Option<&str>, body: Option<&[u8]>) -> String {
        let text = body.map(|bytes| self.decode_prefix(bytes));
        self.sniff(declared, text.as_deref())
    }

    /// Determine the MIME type and record which rule decided it.
    pub fn sniff_outcome(&self, declared: Option<&str>, body: Option<&str>) -> SniffOutcome {
        let content_type = normalize(declared);

        let outcome = if content_type.is_empty() {
            self.sniff_undeclared(body)
        } else if is_xml_type(content_type) {
            SniffOutcome::new(content_type, SniffSource::Declared)
        } else if content_type == TEXT_HTML {
            self.check_html(body)
        } else {
            SniffOutcome::new(content_type, SniffSource::Declared)
        };

        debug!(
            declared = ?declared,
            normalized = content_type,
            mime_type = %outcome.mime_type,
            source = ?outcome.source,
            "sniffed content type"
        );
        outcome
    }

    fn sniff_undeclared(&self, body: Option<&str>) -> SniffOutcome {
        let prefix = self.prefix(body);

        for (name, classify) in UNDECLARED_CHAIN {
            if let Some(mime_type) = classify(&prefix) {
                trace!(classifier = name, mime_type, "classifier matched");
                return SniffOutcome::new(mime_type, SniffSource::Sniffed);
            }
        }

        SniffOutcome::new(TEXT_PLAIN, SniffSource::Fallback)
    }

    fn check_html(&self, body: Option<&str>) -> SniffOutcome {
        let prefix = self.prefix(body);

        match xml::classify(&prefix) {
            Some(mime_type) => {
                trace!(classifier = "xml", mime_type, "declared html is xml");
                SniffOutcome::new(mime_type, SniffSource::Corrected)
            }
            None => SniffOutcome::new(TEXT_HTML, SniffSource::Declared),
        }
    }

    fn prefix<'a>(&self, body: Option<&'a str>) -> Cow<'a, str> {
        extract_with_limit(body, self.options.prefix_len)
    }

    /// Decode only as many bytes as can contribute to the prefix.
    ///
    /// A UTF-8 character is at most four bytes, so `4 * prefix_len` bytes
    /// always decode to at least `prefix_len` characters.
    fn decode_prefix<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        let end = bytes.len().min(self.options.prefix_len.saturating_mul(4));
        String::from_utf8_lossy(&bytes[..end])
    }
}

fn is_xml_type(content_type: &str) -> bool {
    content_type == APPLICATION_XML || content_type == TEXT_XML || content_type.ends_with(XML_SUFFIX)
}

/// Determine the MIME type to trust, using default options.
///
/// Total over its inputs: never panics and always returns a non-empty type.
pub fn sniff(declared: Option<&str>, body: Option<&str>) -> String {
    Sniffer::default().sniff(declared, body)
}

/// Determine the MIME type to trust for a raw byte body, using default options.
///
/// Invalid UTF-8 is decoded lossily; control bytes survive decoding and are
/// still seen by the binary check.
pub fn sniff_bytes(declared: Option<&str>, body: Option<&[u8]>) -> String {
    Sniffer::default().sniff_bytes(declared, body)
}
