/// Storage-specific errors
use coinsextra_core::QueryError;
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// A column value could not be mapped to JSON
    #[error("Failed to decode column `{column}`: {message}")]
    Decode { column: String, message: String },

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a decode error
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }
}

impl From<StorageError> for QueryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Decode { column, message } => QueryError::decode(column, message),
            StorageError::Database(e) => QueryError::database(e.to_string()),
        }
    }
}
