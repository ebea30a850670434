//! Domain Errors
//!
//! Error types for registry, dispatch and encoding operations.

use thiserror::Error;

use crate::domain::value_objects::ServerPhase;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Model '{model}' does not exist")]
    ModelNotFound { model: String },

    #[error("Encoding failed for model '{model}': {reason}")]
    EncodingFailed { model: String, reason: String },

    #[error("Failed to load model '{model}': {reason}")]
    RegistryPopulationFailed { model: String, reason: String },

    #[error("Server is not serving requests (phase: {phase})")]
    NotServing { phase: ServerPhase },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn model_not_found<T: AsRef<str>>(model: T) -> Self {
        Self::ModelNotFound {
            model: model.as_ref().to_string(),
        }
    }

    pub fn encoding_failed<T: AsRef<str>, E: std::fmt::Display>(model: T, reason: E) -> Self {
        Self::EncodingFailed {
            model: model.as_ref().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn population_failed<T: AsRef<str>, E: std::fmt::Display>(model: T, reason: E) -> Self {
        Self::RegistryPopulationFailed {
            model: model.as_ref().to_string(),
            reason: reason.to_string(),
        }
    }
}
