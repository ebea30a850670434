//! Vecserve API Routes
//!
//! - /v1/embeddings - Encode text (POST, JSON body)
//! - /v1/encode - Encode a single text (GET, query string)
//! - /v1/models - Loaded model listing
//! - /health - Lifecycle status
//! - /metrics - Prometheus scrape endpoint
//! - /swagger-ui - OpenAPI documentation

pub mod embeddings;
pub mod health;
pub mod metrics;
pub mod models;
pub mod swagger;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiError;
use crate::AppState;

/// Reject API calls unless the server is in the `Serving` phase
async fn require_serving(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state.lifecycle.ensure_serving()?;
    Ok(next.run(request).await)
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    // Lifecycle-gated routes
    let api_routes = Router::new()
        .merge(embeddings::router())
        .merge(models::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_serving));

    // OpenAPI documentation
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(health::router())
        .merge(metrics::router())
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use vecserve::ModelVariant;

    use crate::application::testing::{entry, sample_registry_with, FailingEncoder, StubEncoder};
    use crate::application::{EmbeddingService, Lifecycle, ModelRegistry};
    use crate::metrics::{EncodeMetrics, EncodeOutcome};

    struct Harness {
        state: AppState,
        stub: Arc<StubEncoder>,
    }

    fn harness() -> Harness {
        let stub = Arc::new(StubEncoder::sample());
        let service = EmbeddingService::new(
            Arc::new(sample_registry_with(stub.clone())),
            EncodeMetrics::new().unwrap(),
        );
        let lifecycle = Lifecycle::new();
        lifecycle.begin_serving();
        Harness {
            state: AppState {
                embedding_service: Arc::new(service),
                lifecycle: Arc::new(lifecycle),
            },
            stub,
        }
    }

    async fn send(state: &AppState, request: Request) -> (StatusCode, Vec<u8>) {
        let response = app(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn send_json(state: &AppState, request: Request) -> (StatusCode, Value) {
        let (status, body) = send(state, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request {
        axum::http::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_embeddings_standard_model() {
        let h = harness();
        let (status, body) = send_json(
            &h.state,
            post_json("/v1/embeddings", json!({"model": "modelA", "input": ["hello", "world"]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "model": "modelA",
                "object": "list",
                "data": [
                    {"index": 0, "object": "embedding", "embedding": [1.0, 2.0], "dims": 2},
                    {"index": 1, "object": "embedding", "embedding": [3.0, 4.0], "dims": 2}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_embeddings_normalized_model() {
        let h = harness();
        let (status, body) = send_json(
            &h.state,
            post_json("/v1/embeddings", json!({"model": "modelB", "input": "wide"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        let values: Vec<f64> = data[0]["embedding"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        assert_eq!(data[0]["dims"], json!(values.len()));
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!(mean.abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_unknown_model_is_client_error() {
        let h = harness();
        let (status, body) = send_json(
            &h.state,
            post_json("/v1/embeddings", json!({"model": "missing", "input": "x"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Model 'missing' does not exist"}));
        assert_eq!(h.stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_encoding_failure_gets_generic_envelope() {
        let registry = ModelRegistry::from_entries(vec![entry(
            "broken",
            ModelVariant::Standard,
            Arc::new(FailingEncoder),
        )])
        .unwrap();
        let lifecycle = Lifecycle::new();
        lifecycle.begin_serving();
        let state = AppState {
            embedding_service: Arc::new(EmbeddingService::new(
                Arc::new(registry),
                EncodeMetrics::new().unwrap(),
            )),
            lifecycle: Arc::new(lifecycle),
        };

        let (status, body) = send_json(
            &state,
            post_json("/v1/embeddings", json!({"model": "broken", "input": ["a", "b"]})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Failed to encode input with model 'broken'"}));
        assert_eq!(
            state
                .embedding_service
                .metrics()
                .encode_count(EncodeOutcome::Failure),
            1
        );
    }

    #[tokio::test]
    async fn test_empty_input_list() {
        let h = harness();
        let (status, body) = send_json(
            &h.state,
            post_json("/v1/embeddings", json!({"model": "modelA", "input": []})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
        assert_eq!(h.stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_gets_error_envelope() {
        let h = harness();
        let (status, body) = send_json(
            &h.state,
            post_json("/v1/embeddings", json!({"model": "modelA", "input": 42})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_user_field_is_ignored() {
        let h = harness();
        let (status, body) = send_json(
            &h.state,
            post_json(
                "/v1/embeddings",
                json!({"model": "modelA", "input": "hello", "user": "someone"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["embedding"], json!([1.0, 2.0]));
    }

    #[tokio::test]
    async fn test_encode_query_form() {
        let h = harness();
        let (status, body) = send_json(&h.state, get("/v1/encode?model=modelA&input=world")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["model"], json!("modelA"));
        assert_eq!(body["data"][0]["embedding"], json!([3.0, 4.0]));

        let (status, body) = send_json(&h.state, get("/v1/encode?model=nope&input=world")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], json!("Model 'nope' does not exist"));

        let (status, _) = send_json(&h.state, get("/v1/encode?model=modelA")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_list_models() {
        let h = harness();
        let (status, body) = send_json(&h.state, get("/v1/models")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"object": "list", "data": ["modelA", "modelB"]}));
    }

    #[tokio::test]
    async fn test_requests_rejected_outside_serving() {
        let h = harness();
        h.state.lifecycle.begin_shutdown();

        let (status, body) = send_json(&h.state, get("/v1/models")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["detail"].as_str().unwrap().contains("shutting_down"));

        let (status, _) = send_json(
            &h.state,
            post_json("/v1/embeddings", json!({"model": "modelA", "input": "hello"})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(h.stub.calls(), 0);

        let (status, body) = send_json(&h.state, get("/health")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["phase"], json!("shutting_down"));
    }

    #[tokio::test]
    async fn test_health_while_serving() {
        let h = harness();
        let (status, body) = send_json(&h.state, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("ok"));
        assert_eq!(body["models"], json!(2));
    }

    #[tokio::test]
    async fn test_metrics_count_one_observation_per_encode() {
        let h = harness();
        for _ in 0..3 {
            send(
                &h.state,
                post_json("/v1/embeddings", json!({"model": "modelA", "input": "hello"})),
            )
            .await;
        }
        // validation failure: not observed
        send(
            &h.state,
            post_json("/v1/embeddings", json!({"model": "missing", "input": "hello"})),
        )
        .await;

        let metrics = h.state.embedding_service.metrics();
        assert_eq!(metrics.encode_count(EncodeOutcome::Success), 3);
        assert_eq!(metrics.encode_count(EncodeOutcome::Failure), 0);

        let (status, body) = send(&h.state, get("/metrics")).await;
        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains(r#"encode_request_processing_seconds_count{outcome="success"} 3"#));
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let h = harness();
        let (status, body) = send_json(&h.state, get("/api-docs/openapi.json")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/v1/embeddings"].is_object());
        assert!(body["paths"]["/v1/models"].is_object());
    }
}
