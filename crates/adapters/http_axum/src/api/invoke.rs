//! The invoke endpoint — one POST carrying an operation name and arguments.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use ledgerhub_app::dispatch::Invocation;
use ledgerhub_app::ports::KeyedStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for an invocation.
#[derive(Deserialize)]
pub struct InvokeRequest {
    /// Operation name, e.g. `"AddDevice"`.
    pub function: String,
    /// JSON-encoded argument strings, one JSON value per element.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Possible responses from the invoke endpoint.
pub enum InvokeResponse {
    /// The operation produced a JSON payload.
    Payload(Vec<u8>),
    /// The operation succeeded with nothing to return.
    Empty,
}

impl IntoResponse for InvokeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Payload(bytes) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                bytes,
            )
                .into_response(),
            Self::Empty => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/invoke`
pub async fn invoke<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<InvokeRequest>,
) -> Result<InvokeResponse, ApiError>
where
    S: KeyedStore + Send + Sync + 'static,
{
    let payload = state
        .dispatcher
        .dispatch(Invocation {
            function: req.function,
            args: req.args,
        })
        .await?;

    if payload.is_empty() {
        Ok(InvokeResponse::Empty)
    } else {
        Ok(InvokeResponse::Payload(payload))
    }
}
