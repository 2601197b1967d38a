//! Error types for the appointment checker
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Checker Error Enum ==
/// Unified error type for the checker and its HTTP API.
///
/// The cache and statistics layer never produces these; probe failures are
/// reported as outcomes, not errors.
#[derive(Error, Debug)]
pub enum CheckerError {
    /// Country is not a Schengen member
    #[error("{0} is not a Schengen country")]
    NotSchengen(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CheckerError {
    fn into_response(self) -> Response {
        let status = match &self {
            CheckerError::NotSchengen(_) => StatusCode::BAD_REQUEST,
            CheckerError::NotFound(_) => StatusCode::NOT_FOUND,
            CheckerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CheckerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the checker.
pub type Result<T> = std::result::Result<T, CheckerError>;
