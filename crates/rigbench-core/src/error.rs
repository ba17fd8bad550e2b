//! Error types for rigbench-core

use crate::ComponentKind;
use thiserror::Error;

/// Core error type
///
/// Only construction and editing of catalog rows can fail. The evaluators
/// never return errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Unknown component kind: {0}")]
    UnknownKind(String),

    #[error("Kind mismatch: expected {expected}, got {got}")]
    KindMismatch {
        expected: ComponentKind,
        got: ComponentKind,
    },
}

impl Error {
    /// Shorthand for a validation failure on a named field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
