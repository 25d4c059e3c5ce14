//! Misiones site — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::http::header::RETRY_AFTER;
use axum::response::{IntoResponse, Response};
use misiones_core::error::{DomainError, FieldViolation};
use serde::Serialize;
use thiserror::Error;

/// Seconds a client should wait before retrying after an upstream failure.
pub const RETRY_AFTER_SECONDS: u32 = 5;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The region map could not be loaded.
    #[error("region catalog error: {0}")]
    Catalog(#[from] DomainError),

    /// HTTP client construction failed.
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Whether repeating the request may succeed.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub retryable: bool,
    /// Per-field messages when the input was rejected field by field.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldViolation>,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            DomainError::Validation(_) | DomainError::InvalidFields(_) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
            DomainError::Upstream(_) => (StatusCode::SERVICE_UNAVAILABLE, "upstream_unavailable"),
            DomainError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };
        let retryable = status == StatusCode::SERVICE_UNAVAILABLE;

        let message = self.0.to_string();
        let fields = match self.0 {
            DomainError::InvalidFields(fields) => fields,
            _ => Vec::new(),
        };
        let body = ErrorBody {
            error: error_code,
            message,
            retryable,
            fields,
        };

        if retryable {
            (status, [(RETRY_AFTER, RETRY_AFTER_SECONDS.to_string())], Json(body)).into_response()
        } else {
            (status, Json(body)).into_response()
        }
    }
}
