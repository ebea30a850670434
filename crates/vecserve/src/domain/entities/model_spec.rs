//! ModelSpec - one entry of the model catalog
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ModelVariant;

/// Loader-specific construction options
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadOptions {
    /// Maximum tokenized sequence length; longer inputs are truncated by the encoder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Batch size handed to the encoder for a single call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
}

/// Catalog entry describing how to load a model and expose it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelSpec {
    /// Where the loader finds the weights (model code or path)
    pub source: String,
    /// Public name used as registry key and in requests
    pub name: String,
    #[serde(default)]
    pub variant: ModelVariant,
    #[serde(default, flatten)]
    pub options: LoadOptions,
}

impl ModelSpec {
    /// Create a new spec with default options
    pub fn new(source: impl Into<String>, name: impl Into<String>, variant: ModelVariant) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
            variant,
            options: LoadOptions::default(),
        }
    }
}
