//! Sniffing result with provenance.
//!
//! [`sniff`](crate::sniff) returns a bare MIME type. When a caller needs to
//! know *why* that type was chosen (to log corrections, or to count how often
//! a server mislabels its feeds) use
//! [`Sniffer::sniff_outcome`](crate::Sniffer::sniff_outcome), which returns a
//! [`SniffOutcome`].
//!
//! ## Example
//!
//! ```rust
//! use docsniff::{SniffSource, Sniffer};
//!
//! let sniffer = Sniffer::new(None).unwrap();
//! let outcome = sniffer.sniff_outcome(
//!     Some("text/html"),
//!     Some(r#"<?xml version="1.0"?><feed></feed>"#),
//! );
//!
//! assert_eq!(outcome.mime_type, "application/atom+xml");
//! assert_eq!(outcome.source, SniffSource::Corrected);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule produced a [`SniffOutcome`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SniffSource {
    /// The normalized declared type was trusted as-is.
    Declared,
    /// A declared `text/html` was overridden by an XML signature.
    Corrected,
    /// No type was declared and a classifier recognized the body.
    Sniffed,
    /// No type was declared and nothing was recognized; `text/plain`.
    Fallback,
}

/// The type a document should be treated as, and how it was decided.
///
/// Serializes as `{"mime_type": "...", "source": "declared"}`, which is handy
/// for structured logs or persisting crawl decisions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SniffOutcome {
    /// The MIME type to trust. Never empty.
    pub mime_type: String,

    /// The rule that produced `mime_type`.
    pub source: SniffSource,
}

impl SniffOutcome {
    pub(crate) fn new(mime_type: impl Into<String>, source: SniffSource) -> Self {
        Self {
            mime_type: mime_type.into(),
            source,
        }
    }

    /// Whether the declared type was replaced or filled in.
    pub fn is_corrected(&self) -> bool {
        self.source != SniffSource::Declared
    }
}

impl fmt::Display for SniffOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mime_type)
    }
}

impl From<SniffOutcome> for String {
    fn from(outcome: SniffOutcome) -> Self {
        outcome.mime_type
    }
}
