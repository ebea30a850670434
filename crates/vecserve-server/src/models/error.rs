//! Error envelope

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}
