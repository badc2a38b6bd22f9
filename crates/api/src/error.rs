//! Error types for the Kupo API client.

use thiserror::Error;

/// Errors that can occur when using the Kupo API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured endpoint is not a usable base URL.
    #[error("Invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// A configured header name or value is not valid HTTP.
    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The caller cancelled the request before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// The indexer answered with a non-200 status.
    #[error("Unexpected response status {status}: {body}")]
    Status { status: u16, body: String },

    /// Failed to parse response.
    #[error("Failed to parse response {body}: {message}")]
    Parse { message: String, body: String },
}

/// High-level classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Client misconfiguration, raised before any network call.
    Configuration,
    /// Connection, timeout or cancellation failure.
    Transport,
    /// The indexer rejected the request.
    Protocol,
    /// The response body did not have the expected shape.
    Decode,
}

impl ApiError {
    /// Classify this error.
    pub fn error_category(&self) -> ErrorCategory {
        match self {
            ApiError::InvalidEndpoint { .. } | ApiError::InvalidHeader { .. } => {
                ErrorCategory::Configuration
            }
            ApiError::Request(_) | ApiError::Cancelled => ErrorCategory::Transport,
            ApiError::Status { .. } => ErrorCategory::Protocol,
            ApiError::Parse { .. } => ErrorCategory::Decode,
        }
    }

    /// Build a decode error from a serde failure and the offending body.
    pub(crate) fn parse(err: &serde_json::Error, body: &[u8]) -> Self {
        ApiError::Parse {
            message: err.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
