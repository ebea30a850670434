//! ModelVariant - post-processing strategy selected per model

use serde::{Deserialize, Serialize};

/// Post-processing applied to raw encoder output
///
/// Fixed at registry population time; the encoding pipeline matches on it
/// instead of comparing model names per request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    /// Raw vectors are returned unchanged
    #[default]
    Standard,
    /// Matryoshka-style models: each row is layer-normalized so that any
    /// leading prefix of the vector stays usable after truncation
    NormalizedTruncatable,
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelVariant::Standard => write!(f, "standard"),
            ModelVariant::NormalizedTruncatable => write!(f, "normalized_truncatable"),
        }
    }
}

impl std::str::FromStr for ModelVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "standard" => Ok(ModelVariant::Standard),
            "normalized_truncatable" | "matryoshka" => Ok(ModelVariant::NormalizedTruncatable),
            _ => Err(format!("Unknown model variant: {}", s)),
        }
    }
}
