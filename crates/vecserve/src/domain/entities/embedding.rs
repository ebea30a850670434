//! Embedding - one encoded vector of a batch

use serde::{Deserialize, Serialize};

/// A single output vector, tagged with the position of its input text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    pub index: usize,
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(index: usize, values: Vec<f32>) -> Self {
        Self { index, values }
    }

    /// Number of dimensions, always the length of `values`
    pub fn dims(&self) -> usize {
        self.values.len()
    }

    /// Index a batch of raw vectors by their position
    pub fn from_batch(vectors: Vec<Vec<f32>>) -> Vec<Embedding> {
        vectors
            .into_iter()
            .enumerate()
            .map(|(index, values)| Embedding::new(index, values))
            .collect()
    }
}
