//! Vecserve API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// API Client for Vecserve
pub struct VecserveClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Serialize)]
pub struct EmbeddingRequest<'a> {
    pub model: &'a str,
    pub input: &'a [String],
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingObject {
    pub index: usize,
    pub embedding: Vec<f32>,
    pub dims: usize,
}

impl EmbeddingObject {
    /// Keep the leading `dims` values (matryoshka truncation)
    pub fn truncate(&mut self, dims: usize) {
        self.embedding.truncate(dims);
        self.dims = self.embedding.len();
    }
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingResponse {
    pub model: String,
    pub data: Vec<EmbeddingObject>,
}

#[derive(Debug, Deserialize)]
pub struct ModelListResponse {
    pub data: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub phase: String,
    pub models: usize,
    pub version: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl VecserveClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Server health; 503 bodies are still returned, they describe the phase
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Vecserve API")?;

        resp.json().await.context("Failed to parse response")
    }

    /// List loaded models
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/v1/models", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Vecserve API")?;

        let models: ModelListResponse = parse(resp).await?;
        Ok(models.data)
    }

    /// Embed texts with `model`
    pub async fn embed(&self, model: &str, texts: &[String]) -> Result<EmbeddingResponse> {
        let url = format!("{}/v1/embeddings", self.base_url);
        let request = EmbeddingRequest {
            model,
            input: texts,
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Vecserve API")?;

        parse(resp).await
    }
}

async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.detail)
            .unwrap_or(body);
        bail!("API error ({}): {}", status, detail);
    }

    resp.json().await.context("Failed to parse response")
}
