//! Vecserve Data Models
//!
//! - Embedding: encode requests and responses
//! - ModelList: loaded model names
//! - Health: lifecycle status
//! - ErrorBody: error envelope

mod embedding;
mod error;
mod health;
mod model_list;

pub use embedding::*;
pub use error::*;
pub use health::*;
pub use model_list::*;
