//! Vecserve Domain Library
//!
//! Core domain types and interfaces for the Vecserve embedding server.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure types and logic
//!   - `entities/`: Model specifications and embedding vectors
//!   - `value_objects/`: Immutable value types (ModelVariant, EncodeInput, ServerPhase)
//!   - `services/`: Post-processing transforms (layer normalization)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Model loading and text encoding capabilities
//!
//! # Usage
//!
//! ```rust,ignore
//! use vecserve::{ModelSpec, ModelVariant, TextEncoder};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    layer_norm, layer_norm_in_place, DomainError, EncodeInput, Embedding, LoadOptions, ModelSpec,
    ModelVariant, ServerPhase, LAYER_NORM_EPS,
};
pub use ports::{EncoderHandle, ModelLoader, TextEncoder};
