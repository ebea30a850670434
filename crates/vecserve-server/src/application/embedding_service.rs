//! Embedding Application Service (Use Case)
//!
//! Request dispatch: validate the model, normalize the input into a batch,
//! run the pipeline and record its latency.

use std::sync::Arc;

use uuid::Uuid;
use vecserve::{DomainError, EncodeInput, Embedding};

use super::{pipeline, ModelRegistry};
use crate::metrics::{EncodeMetrics, EncodeOutcome};

/// Application service for encode and listing operations
pub struct EmbeddingService {
    registry: Arc<ModelRegistry>,
    metrics: EncodeMetrics,
}

impl EmbeddingService {
    pub fn new(registry: Arc<ModelRegistry>, metrics: EncodeMetrics) -> Self {
        Self { registry, metrics }
    }

    /// Encode `input` with the model named `model`
    ///
    /// Unknown models fail before any encoding work and are not timed.
    /// Every pipeline run is timed, whatever its outcome; if this future is
    /// dropped mid-encode the run is recorded as cancelled.
    pub async fn encode(
        &self,
        model: &str,
        input: EncodeInput,
    ) -> Result<Vec<Embedding>, DomainError> {
        let entry = self.registry.lookup(model)?;
        let inputs = input.into_batch();
        let batch_size = inputs.len();
        let request_id = Uuid::new_v4();

        tracing::debug!(%request_id, model, batch_size, "encode request");

        let timer = self.metrics.start_encode();
        let result = pipeline::encode(entry, inputs).await;

        let outcome = match &result {
            Ok(_) => EncodeOutcome::Success,
            Err(e) => {
                tracing::error!(
                    %request_id,
                    model,
                    batch_size,
                    error = %e,
                    "encode failed"
                );
                EncodeOutcome::Failure
            }
        };
        let elapsed = timer.finish(outcome);

        if result.is_ok() {
            tracing::info!(
                "🧬 {} encoded {} inputs in {:.1}ms [{}]",
                model,
                batch_size,
                elapsed.as_secs_f64() * 1000.0,
                request_id
            );
        }

        result
    }

    /// Loaded model names in population order
    pub fn list_models(&self) -> Vec<String> {
        self.registry.list_names()
    }

    pub fn model_count(&self) -> usize {
        self.registry.len()
    }

    pub fn metrics(&self) -> &EncodeMetrics {
        &self.metrics
    }
}
