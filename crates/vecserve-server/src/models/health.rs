//! Health check DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// "ok" while serving, otherwise "unavailable"
    pub status: String,
    /// uninitialized, serving or shutting_down
    pub phase: String,
    /// Number of loaded models
    pub models: usize,
    pub version: String,
}
