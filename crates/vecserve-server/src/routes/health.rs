//! Health Route - lifecycle status, answered in every phase

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::models::HealthResponse;
use crate::AppState;

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Serving", body = HealthResponse),
        (status = 503, description = "Starting up or shutting down", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let phase = state.lifecycle.phase();
    let (code, status) = if phase.accepts_requests() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            phase: phase.to_string(),
            models: state.embedding_service.model_count(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
