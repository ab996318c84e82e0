//! # Error Handling Middleware
//!
//! Maps domain-specific errors to HTTP status codes and JSON error
//! responses so every endpoint fails the same way: validation problems as
//! 400, failed sign-ins as 401, missing records as 404, and persistence or
//! unexpected failures as 500 without leaking internals.

use acadsync_core::errors::AcadError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain [`AcadError`] instances and implements
/// `IntoResponse`, which lets handlers return `Result<Json<T>, AppError>`
/// and use `?` on anything convertible into an `AcadError`.
#[derive(Debug)]
pub struct AppError(pub AcadError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            AcadError::NotFound(_) => StatusCode::NOT_FOUND,
            AcadError::Validation(_) => StatusCode::BAD_REQUEST,
            AcadError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AcadError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AcadError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<AcadError> for AppError {
    fn from(err: AcadError) -> Self {
        AppError(err)
    }
}

/// Lets handlers use `?` on database-layer results: an `eyre::Report`
/// becomes the `Database` variant (an internal server error on the wire).
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AcadError::Database(err))
    }
}
