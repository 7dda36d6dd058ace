//! Error types for the dropboxlib library.

use thiserror::Error;

/// Main error type for dropboxlib operations.
#[derive(Error, Debug)]
pub enum DropboxError {
    /// A caller-supplied argument was rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The transport failed; passed through unmodified.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Reading an upload payload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by a [`Transport`](crate::api::Transport).
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request completed with a non-success status code.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The request did not complete in time.
    #[error("HTTP request timed out")]
    Timeout,

    /// Custom transport failure.
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dropboxlib operations.
pub type Result<T> = std::result::Result<T, DropboxError>;
