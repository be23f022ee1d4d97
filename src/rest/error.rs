//! REST error taxonomy.
//!
//! Every error is terminal for its request and surfaced to the caller as a
//! plain-text body with the matching status code. Method-not-allowed (405)
//! is produced by axum's method routing and never reaches this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors a task handler can surface to the HTTP caller.
///
/// The display strings are the wire-format bodies; do not reword.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Operation named an id not present in the store.
    #[error("Task not found")]
    TaskNotFound,
    /// The `/tasks/{id}` suffix is not a plain base-10 integer.
    #[error("Invalid task ID")]
    InvalidTaskId,
    /// Request body did not decode into the task shape.
    #[error("Invalid task data")]
    InvalidTaskData,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::TaskNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidTaskId | ApiError::InvalidTaskData => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
