//! Model Loader Port
//!
//! Abstract interface for turning a catalog entry into a ready encoder.

use crate::domain::entities::ModelSpec;
use crate::domain::errors::DomainError;
use crate::ports::services::EncoderHandle;

/// Blocking model loading capability (may download weights)
pub trait ModelLoader: Send + Sync {
    /// Load the model described by `spec`
    fn load(&self, spec: &ModelSpec) -> Result<EncoderHandle, DomainError>;
}
