//! Error types for the sniffing library.

use thiserror::Error;

/// Result type alias for fallible docsniff operations
pub type Result<T> = std::result::Result<T, SniffError>;

/// Errors that can occur while configuring a [`Sniffer`](crate::Sniffer).
///
/// Sniffing itself never fails; only option validation does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SniffError {
    /// An option value was rejected
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}
