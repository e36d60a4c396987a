use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use keyhole_service::{ResolveError, ShortenError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// JSON error payload: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL")]
    InvalidUrl,
    #[error("Invalid Date")]
    InvalidDate,
    #[error("short URL not found")]
    NotFound,
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidUrl => (StatusCode::BAD_REQUEST, "invalid URL"),
            ApiError::InvalidDate => (StatusCode::BAD_REQUEST, "Invalid Date"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "short URL not found"),
            ApiError::Storage(cause) => {
                // The cause is logged, never sent to the client.
                error!(cause = %cause, "storage failure while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
            ApiError::Internal(cause) => {
                error!(cause = %cause, "internal error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<ShortenError> for ApiError {
    fn from(value: ShortenError) -> Self {
        match value {
            ShortenError::InvalidUrl(_) => Self::InvalidUrl,
            ShortenError::Storage(cause) => Self::Storage(cause),
        }
    }
}

impl From<ResolveError> for ApiError {
    fn from(value: ResolveError) -> Self {
        match value {
            ResolveError::Storage(cause) => Self::Storage(cause),
        }
    }
}
