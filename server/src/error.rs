//! Service errors and their HTTP rendering.
//!
//! # Design
//! `ServiceError` is what the service layer returns. The resource layer pairs
//! it with the request path to build a `ResourceError`, which renders as the
//! JSON body clients of this API expect:
//! `{timestamp, status, error, message, path}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The requested client does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "Resource not found",
        }
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardError {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

/// A `ServiceError` tied to the request that produced it.
#[derive(Debug)]
pub struct ResourceError {
    pub error: ServiceError,
    pub path: String,
}

impl ResourceError {
    pub fn new(error: ServiceError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }

    pub fn body(&self) -> StandardError {
        StandardError {
            timestamp: Utc::now(),
            status: self.error.status().as_u16(),
            error: self.error.title().to_string(),
            message: self.error.to_string(),
            path: self.path.clone(),
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::warn!(path = %self.path, error = %self.error, "request failed");
        (self.error.status(), Json(self.body())).into_response()
    }
}
