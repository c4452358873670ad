//! Error types for ledgerweb-api
//!
//! A single dispatch maps error kinds to HTTP statuses; every error
//! response body carries the machine-readable kind and a message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ledgerweb_core::{CoreError, ErrorCode, ErrorSeverity};
use thiserror::Error;

/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request body
    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    /// Machine-readable kind carried in the response body.
    fn code(&self) -> ErrorCode {
        match self {
            ApiError::BadRequest { .. } => ErrorCode::Validation,
            ApiError::Core(err) => err.code(),
        }
    }

    /// Error kind to HTTP status.
    fn status(&self) -> StatusCode {
        match self.code() {
            ErrorCode::Validation => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Io | ErrorCode::External => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        match &self {
            ApiError::Core(err) if err.severity() == ErrorSeverity::Error => {
                log::error!("request failed: {err}");
            }
            err => log::debug!("request rejected: {err}"),
        }

        let body = Json(serde_json::json!({
            "code": code,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

// ==================== Tests ====================
