use serde::Serialize;
use thiserror::Error;

use crate::core::validation::FieldErrors;

#[derive(Error, Debug, Serialize)]
pub enum ContactBookError {
    /// One or more record fields failed validation
    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(FieldErrors),

    /// Identifier is not a well-formed record id
    #[error("Invalid user id: {0}")]
    InvalidId(String),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    /// Request body could not be read as a user record
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join(", ")
}
