//! Request-level error types.
//!
//! Exactly three outcomes exist beyond success: a rejected write body, a
//! miss on an id, and an unexpected internal failure. All three surface as
//! a JSON `{ "message": ... }` body with the matching status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Write body failed validation against the resource's payload type.
    #[error("Invalid {0} data")]
    Validation(&'static str),
    /// The targeted id does not exist in the resource's collection.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Anything else; carries no detail to the caller.
    #[error("Failed to handle request")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
