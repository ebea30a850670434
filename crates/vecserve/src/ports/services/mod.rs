//! Service Ports
//!
//! Abstract interfaces for external capabilities.

mod encoder;
mod model_loader;

pub use encoder::*;
pub use model_loader::*;
