//! fastembed (ONNX Runtime) adapter
//!
//! Implements `ModelLoader` and `TextEncoder` on top of fastembed-rs.
//! Weights are fetched from the Hugging Face hub into the cache directory on
//! first use; pointing the cache at a pre-filled directory makes loading
//! fully offline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use vecserve::{DomainError, EncoderHandle, ModelLoader, ModelSpec, TextEncoder};

/// Loads catalog entries as fastembed text embedding models
#[derive(Debug, Clone, Default)]
pub struct FastEmbedLoader {
    cache_dir: Option<PathBuf>,
    show_download_progress: bool,
}

impl FastEmbedLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `dir` as the weight cache instead of fastembed's default
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    pub fn with_download_progress(mut self, show: bool) -> Self {
        self.show_download_progress = show;
        self
    }
}

impl ModelLoader for FastEmbedLoader {
    fn load(&self, spec: &ModelSpec) -> Result<EncoderHandle, DomainError> {
        let model = resolve_model(&spec.source).ok_or_else(|| {
            DomainError::population_failed(
                &spec.name,
                format!("unsupported model source '{}'", spec.source),
            )
        })?;

        let mut options =
            InitOptions::new(model).with_show_download_progress(self.show_download_progress);
        if let Some(dir) = &self.cache_dir {
            options = options.with_cache_dir(dir.clone());
        }
        if let Some(max_length) = spec.options.max_length {
            options = options.with_max_length(max_length);
        }

        let embedding = TextEmbedding::try_new(options)
            .map_err(|e| DomainError::population_failed(&spec.name, e))?;

        Ok(Arc::new(FastEmbedEncoder {
            name: spec.name.clone(),
            model: embedding,
            batch_size: spec.options.batch_size,
        }))
    }
}

/// A loaded fastembed model
pub struct FastEmbedEncoder {
    name: String,
    model: TextEmbedding,
    batch_size: Option<usize>,
}

impl std::fmt::Debug for FastEmbedEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastEmbedEncoder")
            .field("name", &self.name)
            .field("batch_size", &self.batch_size)
            .finish_non_exhaustive()
    }
}

impl TextEncoder for FastEmbedEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        let batch: Vec<&str> = texts.iter().map(String::as_str).collect();
        self.model
            .embed(batch, self.batch_size)
            .map_err(|e| DomainError::encoding_failed(&self.name, e))
    }
}

/// Download every catalog model into `dir` so later runs can load offline
pub fn prefetch_models(
    specs: &[ModelSpec],
    dir: &Path,
    show_download_progress: bool,
) -> Result<(), DomainError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        DomainError::Configuration(format!("cannot create {}: {}", dir.display(), e))
    })?;

    let loader = FastEmbedLoader::new()
        .with_cache_dir(dir)
        .with_download_progress(show_download_progress);

    for spec in specs {
        tracing::info!("💾 {} -> {}", spec.name, dir.display());
        loader.load(spec)?;
    }

    Ok(())
}

/// Last path segment of a source identifier, without an `-onnx` suffix
fn short_name(source: &str) -> &str {
    let last = source
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(source);
    last.strip_suffix("-onnx").unwrap_or(last)
}

/// Map a source identifier onto a fastembed model
///
/// Accepts Hugging Face ids (`nomic-ai/nomic-embed-text-v1.5`), fastembed
/// model codes (`Qdrant/all-MiniLM-L6-v2-onnx`) and bare names.
fn resolve_model(source: &str) -> Option<EmbeddingModel> {
    let wanted = short_name(source).to_lowercase();

    match wanted.as_str() {
        "all-minilm-l6-v2" => return Some(EmbeddingModel::AllMiniLML6V2),
        "nomic-embed-text-v1" => return Some(EmbeddingModel::NomicEmbedTextV1),
        "nomic-embed-text-v1.5" => return Some(EmbeddingModel::NomicEmbedTextV15),
        _ => {}
    }

    TextEmbedding::list_supported_models()
        .into_iter()
        .find(|info| {
            info.model_code.eq_ignore_ascii_case(source)
                || short_name(&info.model_code).eq_ignore_ascii_case(&wanted)
        })
        .map(|info| info.model)
}
