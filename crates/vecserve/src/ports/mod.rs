//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with the inference backend.
//!
//! Implementations of these traits live in the infrastructure layer.

pub mod services;

// Re-exports
pub use services::*;
