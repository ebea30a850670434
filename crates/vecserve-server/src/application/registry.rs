//! Model Registry
//!
//! Display name -> loaded encoder. Built once before the server accepts
//! traffic and read-only afterwards, so lookups take no lock.

use std::collections::HashMap;
use std::sync::Arc;

use vecserve::{DomainError, EncoderHandle, ModelLoader, ModelSpec, ModelVariant};

/// A loaded model and the post-processing it needs
pub struct ModelEntry {
    pub name: String,
    pub source: String,
    pub variant: ModelVariant,
    pub encoder: EncoderHandle,
}

impl ModelEntry {
    pub fn new(spec: &ModelSpec, encoder: EncoderHandle) -> Self {
        Self {
            name: spec.name.clone(),
            source: spec.source.clone(),
            variant: spec.variant,
            encoder,
        }
    }
}

impl std::fmt::Debug for ModelEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelEntry")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// Immutable registry of loaded models, in population order
#[derive(Debug, Default)]
pub struct ModelRegistry {
    entries: Vec<ModelEntry>,
    index: HashMap<String, usize>,
}

impl ModelRegistry {
    /// Build a registry from already loaded entries
    ///
    /// Fails if two entries share a display name.
    pub fn from_entries(entries: Vec<ModelEntry>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(DomainError::population_failed(
                    &entry.name,
                    "duplicate display name",
                ));
            }
        }
        Ok(Self { entries, index })
    }

    /// Load every spec with `loader` and build the registry
    ///
    /// Models load in parallel on the blocking pool. Any failure is fatal:
    /// a partially populated registry is never returned.
    pub async fn populate(
        specs: &[ModelSpec],
        loader: Arc<dyn ModelLoader>,
    ) -> Result<Self, DomainError> {
        tracing::info!("Loading {} embedding models in parallel", specs.len());

        let tasks: Vec<_> = specs
            .iter()
            .cloned()
            .map(|spec| {
                let loader = Arc::clone(&loader);
                tokio::task::spawn_blocking(move || {
                    tracing::info!("Loading embedding model: {} ({})", spec.name, spec.source);
                    let encoder = loader.load(&spec)?;
                    Ok::<_, DomainError>(ModelEntry::new(&spec, encoder))
                })
            })
            .collect();

        let mut entries = Vec::with_capacity(specs.len());
        let mut first_error = None;

        // Join in catalog order so the registry keeps insertion order
        for (spec, task) in specs.iter().zip(tasks) {
            match task.await {
                Ok(Ok(entry)) => {
                    tracing::info!("✓ Loaded model: {} [{}]", entry.name, entry.variant);
                    entries.push(entry);
                }
                Ok(Err(e)) => {
                    tracing::error!("✗ Failed to load model {}: {}", spec.name, e);
                    first_error.get_or_insert(e);
                }
                Err(e) => {
                    tracing::error!("✗ Loader task for {} panicked: {}", spec.name, e);
                    first_error.get_or_insert(DomainError::population_failed(&spec.name, e));
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        Self::from_entries(entries)
    }

    /// Find a model by display name
    pub fn lookup(&self, name: &str) -> Result<&ModelEntry, DomainError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| DomainError::model_not_found(name))
    }

    /// Display names in population order
    pub fn list_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Release every encoder handle; returns how many were dropped
    pub fn teardown(mut self) -> usize {
        self.index.clear();
        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            tracing::info!("Releasing model: {}", entry.name);
            drop(entry);
        }
        count
    }
}
