//! Error types and handling for the API server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains, plus its mapping onto HTTP responses. Client-fixable errors
//! are answered with a 4xx and their message; infrastructure failures are
//! logged and answered with a generic 500 so no internals leak.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::domains::ratings::RatingError;
use crate::domains::resources::ResourceError;
use crate::domains::storage::StorageError;

/// A specialized Result type for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Body sent with every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// Unified error type for the API server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the resources domain.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Error originating from the ratings domain.
    #[error(transparent)]
    Rating(#[from] RatingError),

    /// Storage failure outside a domain operation (e.g. at startup).
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The request body could not be read as JSON.
    #[error("Malformed JSON body.")]
    MalformedBody(#[source] JsonRejection),

    /// No route matched the request.
    #[error("Route not found.")]
    RouteNotFound,

    /// The route exists but does not support the request method.
    #[error("Method not allowed.")]
    MethodNotAllowed,
}

impl Error {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Resource(ResourceError::NotFound(_)) | Self::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Resource(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Rating(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            error!(error = ?self, "Request failed: {}", self);
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            if let Self::MalformedBody(rejection) = &self {
                warn!("Rejected request body: {}", rejection.body_text());
            }
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
