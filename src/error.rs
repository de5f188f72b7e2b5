//! Application error type and its HTTP mapping.
//!
//! Errors fall into three categories:
//!
//! - **Client input** ([`AppError::EmptyUrl`], [`AppError::InvalidUrl`],
//!   [`AppError::InvalidId`], [`AppError::InvalidBody`]) - rejected with `400 Bad Request`
//! - **Not found** ([`AppError::NotFound`]) - an expected outcome, `404 Not Found`
//! - **Server faults** ([`AppError::Store`], [`AppError::Encoding`]) - `500 Internal Server Error`

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::StoreError;
use crate::utils::alias_encoder::EncodeError;
use crate::utils::url_validator::UrlValidationError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Coarse error classification used for status codes and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ClientInput,
    NotFound,
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),

    #[error("Failed to encode alias: {0}")]
    Encoding(#[from] EncodeError),
}

impl AppError {
    /// Returns the category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::EmptyUrl
            | AppError::InvalidUrl(_)
            | AppError::InvalidId(_)
            | AppError::InvalidBody(_) => ErrorCategory::ClientInput,
            AppError::NotFound(_) => ErrorCategory::NotFound,
            AppError::Store(_) | AppError::Encoding(_) => ErrorCategory::Internal,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::ClientInput => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON error payload.
    ///
    /// Internal errors carry a generic message; the underlying cause is
    /// logged instead of returned to the client.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::EmptyUrl => ("validation_error", self.to_string(), json!({})),
            AppError::InvalidUrl(reason) => (
                "validation_error",
                "Invalid URL format".to_string(),
                json!({ "reason": reason }),
            ),
            AppError::InvalidId(raw) => (
                "validation_error",
                "Invalid ID".to_string(),
                json!({ "id": raw }),
            ),
            AppError::InvalidBody(reason) => (
                "validation_error",
                "Invalid request body".to_string(),
                json!({ "reason": reason }),
            ),
            AppError::NotFound(message) => ("not_found", message.clone(), json!({})),
            AppError::Store(_) => ("internal_error", "Storage failure".to_string(), json!({})),
            AppError::Encoding(_) => (
                "internal_error",
                "Failed to shorten URL".to_string(),
                json!({}),
            ),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(message) => AppError::NotFound(message),
            other => AppError::Store(other),
        }
    }
}

impl From<UrlValidationError> for AppError {
    fn from(e: UrlValidationError) -> Self {
        match e {
            UrlValidationError::Empty => AppError::EmptyUrl,
            UrlValidationError::InvalidFormat(reason) => AppError::InvalidUrl(reason),
            other => AppError::InvalidUrl(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.category() == ErrorCategory::Internal {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
