//! Commerce error types.

use crate::quote::FieldErrors;
use sarathi_data::CrudError;
use thiserror::Error;

/// Errors that can occur in inquiry operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// One or more form fields were rejected. Nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The content service call failed.
    #[error("Content service error: {0}")]
    Persistence(#[from] CrudError),

    /// A record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Quote request not found.
    #[error("Quote request not found: {0}")]
    QuoteNotFound(String),
}

impl CommerceError {
    /// Whether the visitor has to correct the form.
    pub fn is_validation(&self) -> bool {
        matches!(self, CommerceError::Validation(_))
    }

    /// Whether the same call may succeed if retried unchanged.
    pub fn is_retryable(&self) -> bool {
        match self {
            CommerceError::Persistence(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Field errors, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CommerceError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
