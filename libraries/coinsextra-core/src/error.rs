/// Query error types
use thiserror::Error;

/// Result type alias using `QueryError`
pub type Result<T> = std::result::Result<T, QueryError>;

/// Failure while preparing or executing a query.
///
/// The `Display` text is what callers see in diagnostic responses, so it
/// should read well on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No database handle is bound in the environment
    #[error("database binding is not configured")]
    Unbound,

    /// The database rejected or failed the statement
    #[error("Database error: {0}")]
    Database(String),

    /// A result column could not be converted to JSON
    #[error("Failed to decode column `{column}`: {message}")]
    Decode { column: String, message: String },
}

impl QueryError {
    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create a decode error for the given column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }
}
