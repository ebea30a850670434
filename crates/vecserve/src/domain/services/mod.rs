//! Domain Services
//!
//! Stateless transforms applied to encoder output.

mod layer_norm;

pub use layer_norm::*;
