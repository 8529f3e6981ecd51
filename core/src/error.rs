//! Validation errors for the todo record model.
//!
//! # Design
//! All three kinds mean "the input JSON does not match the record schema"
//! and are deterministic functions of the input, so none of them is
//! retryable. The HTTP layer maps every kind to 400 Bad Request.

use thiserror::Error;

use crate::json::JsonType;

/// Errors returned by `Todo::parse` and `Todo::apply_patch`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A mandatory property is absent from the input object.
    #[error("required property '{name}' is missing")]
    RequiredPropertyMissing { name: String },

    /// A property is present but holds a value of the wrong JSON type.
    #[error(
        "property '{name}' must be of type {expected_type}, got {actual_type} value '{actual_value}'"
    )]
    PropertyTypeMismatch {
        name: String,
        expected_type: JsonType,
        actual_value: String,
        actual_type: JsonType,
    },

    /// The input object carries a property outside the record schema.
    #[error("unexpected property '{name}'")]
    ExtraneousProperty { name: String },
}

impl ModelError {
    /// Name of the property that caused the failure.
    pub fn property(&self) -> &str {
        match self {
            ModelError::RequiredPropertyMissing { name }
            | ModelError::PropertyTypeMismatch { name, .. }
            | ModelError::ExtraneousProperty { name } => name,
        }
    }
}

pub type Result<T, E = ModelError> = std::result::Result<T, E>;
