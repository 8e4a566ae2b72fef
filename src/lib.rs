//! # docsniff
//!
//! Correct a declared content-type by looking at the document body.
//!
//! Servers routinely mislabel what they send: feeds go out as `text/html`,
//! and plenty of responses carry no content-type at all. `docsniff` takes
//! the declared type and the body and returns the type that should actually
//! be trusted, using a practical subset of the
//! [WHATWG MIME sniffing algorithm](https://mimesniff.spec.whatwg.org/#mime-type-sniffing-algorithm).
//! The full browser algorithm has signature tables for images, audio and
//! fonts; on the server side the interesting question is whether a document
//! is parsable, so only HTML, XML feeds and binary content are recognized.
//!
//! ## Basic Usage
//!
//! ```rust
//! use docsniff::sniff;
//!
//! // Missing content-type
//! assert_eq!(sniff(None, Some("<!DOCTYPE html><html></html>")), "text/html");
//!
//! // A feed served as html
//! let feed = r#"<?xml version="1.0"?><feed xmlns="http://www.w3.org/2005/Atom"></feed>"#;
//! assert_eq!(sniff(Some("text/html; charset=utf-8"), Some(feed)), "application/atom+xml");
//!
//! // Everything else is trusted
//! assert_eq!(sniff(Some("image/png"), Some("<html></html>")), "image/png");
//! ```
//!
//! ## Provenance
//!
//! ```rust
//! use docsniff::{SniffSource, Sniffer};
//!
//! let sniffer = Sniffer::new(None).unwrap();
//! let outcome = sniffer.sniff_outcome(None, Some("just some words"));
//!
//! assert_eq!(outcome.mime_type, "text/plain");
//! assert_eq!(outcome.source, SniffSource::Fallback);
//! ```
//!
//! ## Algorithm
//!
//! The declared type is normalized first (parameters dropped, whitespace
//! trimmed). Only two cases look at the body: a missing type, and a declared
//! `text/html` that might really be XML. In both, the classifiers see the first
//! 1024 characters with `<!-- -->` comments removed. See [`Sniffer`] for the
//! exact decision order.
//!
//! ## Logging
//!
//! Decisions are reported through [`tracing`](https://docs.rs/tracing) at
//! `debug` level, classifier hits at `trace`. Install any subscriber to see
//! them.

mod constants;
mod error;
mod extract;
mod normalize;
mod options;
mod outcome;
mod sniffer;

pub mod binary;
pub mod html;
pub mod xml;

// Public exports
pub use constants::{
    APPLICATION_ATOM_XML, APPLICATION_OCTET_STREAM, APPLICATION_RDF_XML, APPLICATION_RSS_XML,
    APPLICATION_XML, DEFAULT_PREFIX_LEN, TEXT_HTML, TEXT_PLAIN, TEXT_XML,
};
pub use error::{Result, SniffError};
pub use extract::{extract, extract_with_limit};
pub use normalize::normalize;
pub use options::{SniffOptions, SniffOptionsBuilder};
pub use outcome::{SniffOutcome, SniffSource};
pub use sniffer::{sniff, sniff_bytes, Sniffer};
