//! Application Layer (Use Cases)
//!
//! Orchestrates the model registry, the encoding pipeline and the server
//! lifecycle for the HTTP handlers.

mod embedding_service;
mod lifecycle;
pub mod pipeline;
mod registry;

#[cfg(test)]
pub mod testing;

pub use embedding_service::EmbeddingService;
pub use lifecycle::Lifecycle;
pub use registry::{ModelEntry, ModelRegistry};
