//! Error types for the exporter
//!
//! The public export entry points never fail: a request that cannot be
//! turned into an operation is skipped and the rest of the document is
//! still produced. `Error` exists for the per-request build path so the
//! assembler can catch, log, and record the reason for each omission.

use thiserror::Error;

/// The main error type for the exporter
#[derive(Error, Debug)]
pub enum Error {
    /// Request method is outside the supported HTTP method set
    #[error("Unsupported HTTP method: {method}")]
    UnsupportedMethod { method: String },

    /// JSON serialization/deserialization failure
    #[error("Failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Anything that doesn't fit a more specific variant
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an unsupported-method error
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Create a generic error from a message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Result type alias for the exporter
pub type Result<T> = std::result::Result<T, Error>;
