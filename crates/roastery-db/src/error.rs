//! Database errors

use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    /// SQLx error
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Record not found
    #[error("record not found")]
    NotFound,

    /// A drink with this title already exists
    #[error("drink titled {0:?} already exists")]
    Conflict(String),

    /// Stored row does not decode into a drink
    #[error("corrupt row: {0}")]
    Corrupt(String),
}

impl DbError {
    /// Map a failed insert/update, turning unique violations into `Conflict`
    pub(crate) fn from_write(err: sqlx::Error, title: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Conflict(title.to_string())
            }
            _ => Self::Sqlx(err),
        }
    }
}

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;
