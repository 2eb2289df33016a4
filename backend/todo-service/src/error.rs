/// Error types for the to-do service
///
/// `AppError` is the HTTP-facing error type; every variant renders as the
/// uniform `{"message": "..."}` body with the matching status code. Store
/// errors are mapped per operation: reads surface as 500, writes as 400.
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::db::StoreError;

/// Result type for handler operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Write payload failed schema validation
    #[error("{0}")]
    Validation(String),

    /// Malformed request (bad identifier or body on a write path)
    #[error("{0}")]
    BadRequest(String),

    /// Identifier does not resolve to an existing record
    #[error("{0}")]
    NotFound(String),

    /// Store failure on a read path, or anything unexpected
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found() -> Self {
        AppError::NotFound("To-do post not found".to_string())
    }

    /// Store failure during a read operation
    pub fn store_read(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }

    /// Store failure during a write operation
    pub fn store_write(err: StoreError) -> Self {
        AppError::BadRequest(err.to_string())
    }

    /// Store failure where only a generic message may leak to the client
    pub fn unexpected(err: StoreError) -> Self {
        tracing::error!(error = %err, "unexpected store error");
        AppError::Internal("Internal server error".to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, "request failed: {}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "message": self.to_string(),
        }))
    }
}
