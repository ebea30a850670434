//! HTTP error mapping
//!
//! Every failure becomes a JSON `{"detail": ...}` body with a status that
//! tells the caller whether fixing the request can help.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use vecserve::DomainError;

use crate::models::ErrorBody;

#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::ModelNotFound { .. } => StatusCode::BAD_REQUEST,
            DomainError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::NotServing { .. } => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::EncodingFailed { .. }
            | DomainError::RegistryPopulationFailed { .. }
            | DomainError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to the caller; server-side causes stay in the logs
    pub fn detail(&self) -> String {
        match &self.0 {
            DomainError::EncodingFailed { model, .. } => {
                format!("Failed to encode input with model '{}'", model)
            }
            DomainError::RegistryPopulationFailed { .. } | DomainError::Configuration(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::InvalidRequest(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(DomainError::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}
