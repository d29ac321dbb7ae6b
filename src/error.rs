//! Error types for the contact form

use crate::state::FieldName;
use thiserror::Error;

/// A single failed validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", .0.required_message())]
    EmptyField(FieldName),
    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: FieldName, min: usize },
    #[error("Please enter a valid {} address", .0.label().to_lowercase())]
    InvalidFormat(FieldName),
}

/// Errors reported by a submission transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
}

/// Errors from the persisted draft store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("draft store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("draft store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
