//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod fastembed;

// Re-exports
pub use self::fastembed::{prefetch_models, FastEmbedLoader};
