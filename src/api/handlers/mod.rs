//! API handlers and shared utilities for Librarium.
//!
//! This module organizes the service's route handlers and provides the
//! error taxonomy shared by the catalog endpoints.

pub mod catalog;
pub mod health;
pub mod root;

use axum::{http::StatusCode, response::IntoResponse};
use tracing::error;

/// Error taxonomy for the catalog endpoints.
///
/// `Validation` never reaches the storage layer; `Database` covers anything
/// the explicit checks did not anticipate and carries no detail to the
/// client.
#[derive(Debug)]
pub(crate) enum ApiError {
    /// Payload shape, parameter type, or pagination bounds violated.
    Validation(String),
    /// Referenced entity does not exist.
    NotFound(&'static str),
    /// Duplicate author name.
    Conflict(&'static str),
    /// Underlying store failure; no retry is attempted.
    Database(sqlx::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

impl IntoResponse for ApiError {
    /// Maps failures into stable HTTP responses for handlers.
    /// Database errors are logged server-side and surfaced as `500` without leaking details.
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Validation(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
            }
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            Self::Conflict(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Database(err) => {
                error!("Database error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
