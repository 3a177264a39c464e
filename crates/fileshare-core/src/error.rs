//! Error types for the browser core.
//!
//! - [`FetchError`] - transport and decoding failures of listing requests
//! - [`NavigationError`] - invalid navigation requests
//!
//! Listing failures are soft: adapters convert a [`FetchError`] into a
//! [`ListingOutcome::Failure`](crate::ListingOutcome::Failure) instead of
//! propagating it.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (service unreachable, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Response decoded but lacks a required field
    #[error("Malformed listing response: missing `{0}`")]
    MissingField(&'static str),
}

/// Errors raised by navigation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The current path has no separator, so no parent can be derived.
    #[error("path '{0}' does not contain a separator")]
    MalformedPath(String),
}
