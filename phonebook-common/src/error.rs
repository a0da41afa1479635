//! Common error types for the phonebook services

use thiserror::Error;

/// Common result type for phonebook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the phonebook binaries
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps mongodb::error::Error)
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Client-supplied identifier does not conform to the storage key format
    #[error("malformatted id: {0}")]
    MalformattedId(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
