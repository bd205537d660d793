#![forbid(unsafe_code)]

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use depot_storage::StoreError;
use serde_json::json;

/// Error taxonomy at the HTTP boundary. Every variant maps to exactly one
/// status code; storage failures are logged server-side and surfaced as 500
/// instead of crashing the handler.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(&'static str),
    InsufficientStock { available: i64, requested: i64 },
    Internal(&'static str),
    Storage(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::InvalidInput(message) => Self::Validation(message.to_string()),
            StoreError::UnknownCategory => Self::NotFound("Category not found"),
            StoreError::UnknownItem => Self::NotFound("Item not found"),
            StoreError::UnknownBranch => Self::NotFound("Branch not found"),
            StoreError::InsufficientStock {
                available,
                requested,
            } => Self::InsufficientStock {
                available,
                requested,
            },
            other => Self::Storage(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(what) => (StatusCode::NOT_FOUND, what.to_string()),
            Self::InsufficientStock {
                available,
                requested,
            } => (
                StatusCode::BAD_REQUEST,
                format!("insufficient main stock (available={available}, requested={requested})"),
            ),
            Self::Internal(message) => {
                tracing::error!(message, "internal failure");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            Self::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("storage failure: {err}"),
                )
            }
        };

        (status, Json(json!({ "success": false, "error": error }))).into_response()
    }
}
