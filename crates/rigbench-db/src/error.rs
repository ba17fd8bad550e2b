//! Error types for catalog store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// A stored blob could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Row not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The dispatcher has no such operation.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// A request could not be parsed or does not fit the stored rows.
    #[error("Invalid request: {0}")]
    Request(String),

    /// Validation or kind error from the catalog model.
    #[error(transparent)]
    Core(#[from] rigbench_core::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn not_found(what: impl std::fmt::Display) -> Self {
        Error::NotFound(what.to_string())
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
