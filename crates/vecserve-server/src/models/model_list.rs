//! Model listing DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Loaded models, in the order they were loaded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ModelListResponse {
    /// Always "list"
    pub object: String,
    pub data: Vec<String>,
}

impl ModelListResponse {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            object: "list".to_string(),
            data: names,
        }
    }
}
