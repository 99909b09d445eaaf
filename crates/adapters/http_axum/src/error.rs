//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use ledgerhub_domain::error::LedgerHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`LedgerHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(LedgerHubError);

impl From<LedgerHubError> for ApiError {
    fn from(err: LedgerHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            LedgerHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LedgerHubError::MalformedArguments(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LedgerHubError::UnknownOperation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LedgerHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            LedgerHubError::AlreadyExists(err) => (StatusCode::CONFLICT, err.to_string()),
            LedgerHubError::Decode(err) => {
                tracing::error!(error = %err, "stored record failed to decode");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            LedgerHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
