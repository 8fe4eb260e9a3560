//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during gateway request handling.
///
/// Malformed request bodies never reach this type; axum's `Json`
/// extractor rejects them with a client-error status before the
/// handler runs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A failure propagated from the explanation capability.
    #[error("explanation failed: {0}")]
    Engine(#[from] gloss_engine::ExplainError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
