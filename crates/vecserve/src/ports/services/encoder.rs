//! Text Encoder Port
//!
//! Abstract interface for the opaque inference call: text in, vectors out.

use std::sync::Arc;

use crate::domain::errors::DomainError;

/// Blocking, CPU-bound text encoding capability
///
/// Implementations must return exactly one vector per input, in input order,
/// or an error for the whole batch.
pub trait TextEncoder: Send + Sync {
    /// Encode a batch of texts into raw (un-post-processed) vectors
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError>;
}

/// Shared handle to a loaded encoder
pub type EncoderHandle = Arc<dyn TextEncoder>;
