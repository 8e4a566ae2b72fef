//! Configuration options for a [`Sniffer`](crate::Sniffer).
//!
//! This module provides [`SniffOptions`] and [`SniffOptionsBuilder`]. The free
//! [`sniff`](crate::sniff) function always runs with the defaults; build a
//! [`Sniffer`](crate::Sniffer) only when you need something else.
//!
//! ## Example
//!
//! ```rust
//! use docsniff::{SniffOptions, Sniffer};
//!
//! // Using default options
//! let sniffer = Sniffer::new(None).unwrap();
//!
//! // Using builder for custom options
//! let options = SniffOptions::builder().prefix_len(512).build();
//! let sniffer = Sniffer::new(Some(options)).unwrap();
//! ```

use crate::constants::DEFAULT_PREFIX_LEN;
use crate::error::{Result, SniffError};

/// Configuration options for the sniffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SniffOptions {
    /// Number of leading body characters handed to the classifiers.
    ///
    /// Signatures past this point are invisible. A larger prefix finds
    /// feeds behind long preambles but raises the per-call scan cost.
    /// Must be non-zero.
    ///
    /// Default: `1024`
    pub prefix_len: usize,
}

impl Default for SniffOptions {
    fn default() -> Self {
        Self {
            prefix_len: DEFAULT_PREFIX_LEN,
        }
    }
}

impl SniffOptions {
    /// Creates a new builder for SniffOptions
    pub fn builder() -> SniffOptionsBuilder {
        SniffOptionsBuilder::default()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.prefix_len == 0 {
            return Err(SniffError::InvalidOption(
                "prefix_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`SniffOptions`].
#[derive(Default)]
pub struct SniffOptionsBuilder {
    prefix_len: Option<usize>,
}

impl SniffOptionsBuilder {
    /// Set the number of characters inspected
    pub fn prefix_len(mut self, len: usize) -> Self {
        self.prefix_len = Some(len);
        self
    }

    /// Build the SniffOptions
    pub fn build(self) -> SniffOptions {
        let defaults = SniffOptions::default();
        SniffOptions {
            prefix_len: self.prefix_len.unwrap_or(defaults.prefix_len),
        }
    }
}
