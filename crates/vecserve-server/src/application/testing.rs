//! Deterministic encoders and loaders for tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use vecserve::{DomainError, EncoderHandle, ModelLoader, ModelSpec, ModelVariant, TextEncoder};

use super::{ModelEntry, ModelRegistry};

/// Looks texts up in a table; unknown texts get a vector derived from their bytes
#[derive(Default)]
pub struct StubEncoder {
    table: HashMap<String, Vec<f32>>,
    calls: AtomicUsize,
}

impl StubEncoder {
    pub fn sample() -> Self {
        let mut table = HashMap::new();
        table.insert("hello".to_string(), vec![1.0, 2.0]);
        table.insert("world".to_string(), vec![3.0, 4.0]);
        table.insert("wide".to_string(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        Self {
            table,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `encode` invocations so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fallback(text: &str) -> Vec<f32> {
        let bytes = text.as_bytes();
        vec![
            bytes.len() as f32,
            bytes.first().copied().unwrap_or(0) as f32,
            bytes.last().copied().unwrap_or(0) as f32,
        ]
    }
}

impl TextEncoder for StubEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts
            .iter()
            .map(|t| self.table.get(t).cloned().unwrap_or_else(|| Self::fallback(t)))
            .collect())
    }
}

/// Always fails
pub struct FailingEncoder;

impl TextEncoder for FailingEncoder {
    fn encode(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        Err(DomainError::encoding_failed("stub", "boom"))
    }
}

/// Blocks for `delay` before answering like `StubEncoder`
pub struct SlowEncoder {
    delay: Duration,
    inner: StubEncoder,
}

impl SlowEncoder {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: StubEncoder::sample(),
        }
    }

    /// Number of encodes started so far
    pub fn calls(&self) -> usize {
        self.inner.calls()
    }
}

impl TextEncoder for SlowEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        Ok(texts
            .iter()
            .map(|t| self.inner.table.get(t).cloned().unwrap_or_else(|| StubEncoder::fallback(t)))
            .collect())
    }
}

/// Drops the last vector of every batch
pub struct ShortEncoder;

impl TextEncoder for ShortEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts.iter().skip(1).map(|_| vec![0.0]).collect())
    }
}

/// Builds `StubEncoder`s, optionally failing for one model name
#[derive(Default)]
pub struct StubLoader {
    fail_on: Option<String>,
}

impl StubLoader {
    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
        }
    }
}

impl ModelLoader for StubLoader {
    fn load(&self, spec: &ModelSpec) -> Result<EncoderHandle, DomainError> {
        if self.fail_on.as_deref() == Some(spec.name.as_str()) {
            return Err(DomainError::population_failed(&spec.name, "weights missing"));
        }
        Ok(Arc::new(StubEncoder::sample()))
    }
}

pub fn entry(name: &str, variant: ModelVariant, encoder: EncoderHandle) -> ModelEntry {
    ModelEntry::new(&ModelSpec::new(format!("test/{name}"), name, variant), encoder)
}

/// `modelA` (standard) and `modelB` (normalized truncatable)
pub fn sample_registry() -> ModelRegistry {
    sample_registry_with(Arc::new(StubEncoder::sample()))
}

pub fn sample_registry_with(encoder: Arc<StubEncoder>) -> ModelRegistry {
    ModelRegistry::from_entries(vec![
        entry("modelA", ModelVariant::Standard, encoder.clone()),
        entry("modelB", ModelVariant::NormalizedTruncatable, encoder),
    ])
    .expect("sample registry has unique names")
}
