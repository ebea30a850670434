//! Embedding Routes - encode text with a loaded model

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{EmbeddingRequest, EmbeddingResponse, EncodeQuery, ErrorBody};
use crate::AppState;

async fn encode(state: &AppState, request: EmbeddingRequest) -> Result<EmbeddingResponse, ApiError> {
    if let Some(user) = &request.user {
        tracing::debug!(user = %user, model = %request.model, "ignoring user field");
    }

    let embeddings = state
        .embedding_service
        .encode(&request.model, request.input)
        .await?;

    Ok(EmbeddingResponse::new(request.model, embeddings))
}

/// Create embeddings
#[utoipa::path(
    post,
    path = "/v1/embeddings",
    request_body = EmbeddingRequest,
    responses(
        (status = 200, description = "One embedding per input, in input order", body = EmbeddingResponse),
        (status = 400, description = "Unknown model", body = ErrorBody),
        (status = 422, description = "Malformed request body", body = ErrorBody),
        (status = 500, description = "Encoding failed", body = ErrorBody),
        (status = 503, description = "Server not serving", body = ErrorBody)
    ),
    tag = "Embeddings"
)]
pub async fn create_embeddings(
    State(state): State<AppState>,
    payload: Result<Json<EmbeddingRequest>, JsonRejection>,
) -> Result<Json<EmbeddingResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(encode(&state, request).await?))
}

/// Encode a single text given in the query string
#[utoipa::path(
    get,
    path = "/v1/encode",
    params(EncodeQuery),
    responses(
        (status = 200, description = "Embedding of the input", body = EmbeddingResponse),
        (status = 400, description = "Unknown model", body = ErrorBody),
        (status = 422, description = "Missing query parameters", body = ErrorBody),
        (status = 500, description = "Encoding failed", body = ErrorBody),
        (status = 503, description = "Server not serving", body = ErrorBody)
    ),
    tag = "Embeddings"
)]
pub async fn encode_query(
    State(state): State<AppState>,
    query: Result<Query<EncodeQuery>, QueryRejection>,
) -> Result<Json<EmbeddingResponse>, ApiError> {
    let Query(query) = query?;
    Ok(Json(encode(&state, query.into()).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/embeddings", post(create_embeddings))
        .route("/v1/encode", get(encode_query))
}
