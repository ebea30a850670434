//! Embedding request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use vecserve::{EncodeInput, Embedding};

/// Encode request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EmbeddingRequest {
    /// Display name of a loaded model
    pub model: String,
    /// A single string or a list of strings
    #[schema(value_type = Object)]
    pub input: EncodeInput,
    /// Opaque caller id, accepted for API compatibility and ignored
    #[serde(default)]
    pub user: Option<String>,
}

/// Query string form of an encode request (single input only)
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EncodeQuery {
    /// Display name of a loaded model
    pub model: String,
    /// Text to encode
    pub input: String,
}

impl From<EncodeQuery> for EmbeddingRequest {
    fn from(query: EncodeQuery) -> Self {
        Self {
            model: query.model,
            input: EncodeInput::Single(query.input),
            user: None,
        }
    }
}

/// One embedding vector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct EmbeddingObject {
    /// Position of the input text this vector belongs to
    pub index: usize,
    /// Always "embedding"
    pub object: String,
    pub embedding: Vec<f32>,
    /// Length of `embedding`
    pub dims: usize,
}

impl From<Embedding> for EmbeddingObject {
    fn from(e: Embedding) -> Self {
        let dims = e.dims();
        Self {
            index: e.index,
            object: "embedding".to_string(),
            embedding: e.values,
            dims,
        }
    }
}

/// Encode response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct EmbeddingResponse {
    pub model: String,
    /// Always "list"
    pub object: String,
    pub data: Vec<EmbeddingObject>,
}

impl EmbeddingResponse {
    pub fn new(model: impl Into<String>, embeddings: Vec<Embedding>) -> Self {
        Self {
            model: model.into(),
            object: "list".to_string(),
            data: embeddings.into_iter().map(EmbeddingObject::from).collect(),
        }
    }
}
