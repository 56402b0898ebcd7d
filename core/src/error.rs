//! Error types for the clients API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant carrying the server's error body,
//! because callers routinely branch on "that client does not exist". Every
//! other unexpected status lands in `HttpError` with the raw body.

use crate::types::ErrorBody;

/// Errors returned by `ClientsClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404; the requested client does not exist.
    #[error("resource not found: {}", .0.message)]
    NotFound(ErrorBody),

    /// The server returned a status other than the expected one or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
