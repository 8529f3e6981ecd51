//! HTTP error mapping for the todo service.
//!
//! # Design
//! Every `ModelError` is a client mistake and maps to 400. The response body
//! is a small JSON object so clients can show the message and highlight the
//! offending property.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::ModelError;

/// Errors returned by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body does not match the todo schema.
    #[error(transparent)]
    Validation(#[from] ModelError),

    /// No todo is stored under the requested id.
    #[error("todo '{id}' not found")]
    NotFound { id: String },
}

/// JSON body sent with every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(ModelError::RequiredPropertyMissing { .. }) => "required_property_missing",
            ApiError::Validation(ModelError::PropertyTypeMismatch { .. }) => "property_type_mismatch",
            ApiError::Validation(ModelError::ExtraneousProperty { .. }) => "extraneous_property",
            ApiError::NotFound { .. } => "not_found",
        }
    }

    pub fn body(&self) -> ErrorBody {
        let property = match self {
            ApiError::Validation(err) => Some(err.property().to_string()),
            ApiError::NotFound { .. } => None,
        };
        ErrorBody {
            error: self.kind(),
            message: self.to_string(),
            property,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(err) => tracing::warn!(property = err.property(), "rejected todo: {err}"),
            ApiError::NotFound { id } => tracing::debug!(%id, "todo not found"),
        }
        (self.status(), Json(self.body())).into_response()
    }
}
