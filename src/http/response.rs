//! Response envelope and failure mapping.
//!
//! Every body leaving the facade is an [`ApiResponse`]. Handlers return
//! `Result<ApiResponse<T>, Failure>`, and [`Failure`] is the only place a
//! failure reason is turned into a status code.

use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// The `{ message, data }` wrapper returned by every operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self::new(message, Some(data))
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// A failed operation, ready to be rendered as an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Any error raised while serving the request.
    Internal { context: &'static str, reason: String },
    /// The target of the operation does not exist.
    NotFound(&'static str),
}

impl Failure {
    pub fn status(&self) -> StatusCode {
        match self {
            Failure::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Failure::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Failure::Internal { context, reason } => format!("{}: {}", context, reason),
            Failure::NotFound(message) => message.to_string(),
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!(status = %status, message = %message, "Request failed");
        } else {
            tracing::info!(status = %status, message = %message, "Request rejected");
        }
        (status, Json(ApiResponse::<()>::empty(message))).into_response()
    }
}

/// Attach an operation context to an error, turning it into a [`Failure`].
pub trait OrFailure<T> {
    fn or_failure(self, context: &'static str) -> Result<T, Failure>;
}

impl<T, E: Display> OrFailure<T> for Result<T, E> {
    fn or_failure(self, context: &'static str) -> Result<T, Failure> {
        self.map_err(|e| Failure::Internal {
            context,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::with_data("ok", vec![1, 2])).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "ok", "data": [1, 2] }));

        let body = serde_json::to_value(ApiResponse::<()>::empty("gone")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "gone", "data": null }));
    }

    #[test]
    fn test_internal_failure() {
        let failure = Err::<(), _>("connection refused")
            .or_failure("An error occurred while fetching products")
            .unwrap_err();

        assert_eq!(failure.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            failure.message(),
            "An error occurred while fetching products: connection refused"
        );
    }

    #[test]
    fn test_not_found_failure() {
        let failure = Failure::NotFound("Product not found");
        assert_eq!(failure.status(), StatusCode::NOT_FOUND);
        assert_eq!(failure.message(), "Product not found");
        assert_eq!(failure.into_response().status(), StatusCode::NOT_FOUND);
    }
}
