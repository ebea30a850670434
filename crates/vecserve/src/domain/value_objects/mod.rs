//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod encode_input;
mod model_variant;
mod server_phase;

pub use encode_input::*;
pub use model_variant::*;
pub use server_phase::*;
