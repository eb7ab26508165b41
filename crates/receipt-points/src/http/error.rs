//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::error::ServiceError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Body is not JSON, or not shaped like a receipt.
    #[error("malformed receipt: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::MalformedBody(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Service(ServiceError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            ApiError::Service(ServiceError::NotFound(_)) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Service(
                ServiceError::Computation { .. }
                | ServiceError::Store(_)
                | ServiceError::IdsExhausted(_),
            ) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
