//! Error types for ProPrompter.

use thiserror::Error;

/// Common error type for ProPrompter.
#[derive(Error, Debug)]
pub enum PrompterError {
    /// Database error.
    ///
    /// Wraps errors from any database backend.
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error (pool exhausted, store unreachable).
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A stored row could not be mapped back into a model.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl From<sqlx::Error> for PrompterError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                PrompterError::DatabaseConnection(e.to_string())
            }
            other => PrompterError::Database(other.to_string()),
        }
    }
}

/// Result type alias for ProPrompter operations.
pub type Result<T> = std::result::Result<T, PrompterError>;
