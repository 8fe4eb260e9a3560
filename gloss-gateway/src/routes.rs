//! Axum route handlers for the gloss gateway API.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use gloss_engine::Explainer;

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Engine = Arc<dyn Explainer>;

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExplainBody {
    pub code: String,
}

/// Envelope returned by `/explain` on success.
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub result: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given explanation capability.
pub fn create_router(engine: Engine, cors: CorsLayer) -> Router {
    Router::new()
        .route("/explain", post(explain))
        .route("/health", get(health))
        .with_state(engine)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /explain` — forward the submitted code to the explanation
/// capability and wrap its reply.
///
/// The code is passed through unmodified, exactly one capability call is
/// made per request, and the response is not sent until that call returns.
///
/// # Errors
/// Returns [`GatewayError::Engine`] if the capability fails; the body
/// validation itself is handled by the `Json` extractor rejection.
pub async fn explain(
    State(engine): State<Engine>,
    Json(body): Json<ExplainBody>,
) -> Result<impl IntoResponse, GatewayError> {
    let result = engine.explain(&body.code).await?;
    Ok(Json(ExplainResponse { result }))
}
