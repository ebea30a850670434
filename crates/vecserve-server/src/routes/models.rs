//! Model Routes - loaded model listing

use axum::{extract::State, routing::get, Json, Router};

use crate::models::{ErrorBody, ModelListResponse};
use crate::AppState;

/// List loaded models
#[utoipa::path(
    get,
    path = "/v1/models",
    responses(
        (status = 200, description = "Loaded model names in load order", body = ModelListResponse),
        (status = 503, description = "Server not serving", body = ErrorBody)
    ),
    tag = "Models"
)]
pub async fn list_models(State(state): State<AppState>) -> Json<ModelListResponse> {
    Json(ModelListResponse::new(state.embedding_service.list_models()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/models", get(list_models))
}
