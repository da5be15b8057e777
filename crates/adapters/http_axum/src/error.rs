//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use registry_domain::error::RegistryError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps application failures to an HTTP response with appropriate status.
pub enum ApiError {
    /// A domain-level failure ([`RegistryError`]).
    Registry(RegistryError),
    /// The request body could not be parsed into the expected shape.
    BadRequest(String),
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Registry(RegistryError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Registry(RegistryError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Registry(RegistryError::Conflict(err)) => (StatusCode::CONFLICT, err.to_string()),
            Self::Registry(RegistryError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
