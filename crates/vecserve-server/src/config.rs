//! Server configuration
//!
//! Command line flags (with environment fallbacks) and the model catalog.
//! The catalog lists every model loaded at startup, in the order it is
//! exposed by `/v1/models`.

use std::collections::HashSet;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use vecserve::{DomainError, ModelSpec, ModelVariant};

/// Vecserve embedding server
#[derive(Debug, Clone, Parser)]
#[command(name = "vecserve-server")]
#[command(about = "Serve text embedding models over HTTP", long_about = None)]
#[command(version)]
pub struct ServerArgs {
    /// Host address to bind to
    #[arg(long, env = "VECSERVE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "VECSERVE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// TOML model catalog (defaults to the built-in catalog)
    #[arg(long, env = "VECSERVE_MODELS_CONFIG")]
    pub models_config: Option<PathBuf>,

    /// Load model weights from this directory instead of the default cache
    #[arg(long, env = "VECSERVE_MODELS_DIR")]
    pub load_models_from: Option<PathBuf>,

    /// Save model weights to this directory, then exit
    #[arg(long, conflicts_with = "load_models_from")]
    pub save_models_to: Option<PathBuf>,

    /// Show download progress bars while fetching weights
    #[arg(long, env = "VECSERVE_SHOW_PROGRESS")]
    pub show_download_progress: bool,
}

impl ServerArgs {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }

    /// Resolve the catalog from `--models-config` or the built-in default
    pub fn catalog(&self) -> Result<ModelCatalog> {
        let catalog = match &self.models_config {
            Some(path) => ModelCatalog::load(path)?,
            None => ModelCatalog::default(),
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Ordered list of models to load at startup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelCatalog {
    #[serde(default)]
    pub models: Vec<ModelSpec>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            models: vec![
                ModelSpec::new(
                    "sentence-transformers/all-MiniLM-L6-v2",
                    "all-MiniLM-L6-v2",
                    ModelVariant::Standard,
                ),
                ModelSpec::new(
                    "nomic-ai/nomic-embed-text-v1",
                    "nomic-embed-text-v1",
                    ModelVariant::Standard,
                ),
                ModelSpec::new(
                    "nomic-ai/nomic-embed-text-v1.5",
                    "nomic-embed-text-v1.5",
                    ModelVariant::NormalizedTruncatable,
                ),
            ],
        }
    }
}

impl ModelCatalog {
    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model catalog from {:?}", path))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse model catalog {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reject catalogs that would produce an empty or ambiguous registry
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.models.is_empty() {
            return Err(DomainError::Configuration(
                "model catalog is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for spec in &self.models {
            if spec.name.trim().is_empty() {
                return Err(DomainError::Configuration(format!(
                    "model with source '{}' has an empty name",
                    spec.source
                )));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(DomainError::Configuration(format!(
                    "duplicate model name '{}'",
                    spec.name
                )));
            }
        }

        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }
}
