//! Encoding Pipeline
//!
//! Runs the blocking encoder on tokio's blocking pool and applies the
//! post-processing selected by the model variant. The result is all or
//! nothing: either one embedding per input, in input order, or an error.

use vecserve::{layer_norm, DomainError, Embedding, ModelVariant};

use super::ModelEntry;

/// Encode `inputs` with the model in `entry`
///
/// Inputs are passed to the encoder unchanged; sequence length limits are
/// left to the encoder (see `LoadOptions::max_length`). If the caller is
/// dropped mid-flight the blocking call still runs to completion and its
/// result is discarded.
pub async fn encode(entry: &ModelEntry, inputs: Vec<String>) -> Result<Vec<Embedding>, DomainError> {
    if inputs.is_empty() {
        return Ok(Vec::new());
    }

    let encoder = entry.encoder.clone();
    let variant = entry.variant;
    let model = entry.name.clone();

    let vectors = tokio::task::spawn_blocking(move || {
        // Errors always carry the registry name, not the encoder's own
        let raw = encoder.encode(&inputs).map_err(|e| match e {
            DomainError::EncodingFailed { reason, .. } => {
                DomainError::encoding_failed(&model, reason)
            }
            other => DomainError::encoding_failed(&model, other),
        })?;

        if raw.len() != inputs.len() {
            return Err(DomainError::encoding_failed(
                &model,
                format!(
                    "encoder returned {} vectors for {} inputs",
                    raw.len(),
                    inputs.len()
                ),
            ));
        }

        Ok(post_process(variant, raw))
    })
    .await
    .map_err(|e| DomainError::encoding_failed(&entry.name, e))??;

    Ok(Embedding::from_batch(vectors))
}

/// Apply the variant's transform to a batch of raw vectors
pub fn post_process(variant: ModelVariant, raw: Vec<Vec<f32>>) -> Vec<Vec<f32>> {
    match variant {
        ModelVariant::Standard => raw,
        ModelVariant::NormalizedTruncatable => layer_norm(raw),
    }
}
