//! Domain Entities
//!
//! Core domain objects.

mod embedding;
mod model_spec;

pub use embedding::*;
pub use model_spec::*;
