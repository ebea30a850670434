//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    EmbeddingObject, EmbeddingRequest, EmbeddingResponse, ErrorBody, HealthResponse,
    ModelListResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Embedding endpoints
        super::embeddings::create_embeddings,
        super::embeddings::encode_query,
        // Model endpoints
        super::models::list_models,
        // Operational endpoints
        super::health::health_check,
        super::metrics::metrics,
    ),
    info(
        title = "Vecserve API",
        version = "0.1.0",
        description = "Text embedding inference server.\n\nHolds a fixed set of embedding models in memory and returns one vector per input text.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Embeddings", description = "Encode text into vectors"),
        (name = "Models", description = "Loaded models"),
        (name = "Health", description = "Health check endpoints"),
        (name = "Metrics", description = "Prometheus metrics"),
    ),
    components(
        schemas(
            EmbeddingRequest,
            EmbeddingObject,
            EmbeddingResponse,
            ModelListResponse,
            HealthResponse,
            ErrorBody,
        )
    ),
)]
pub struct ApiDoc;
