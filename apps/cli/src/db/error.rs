//! Database error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("card not found: {0}")]
    CardNotFound(i64),

    #[error("duplicate question")]
    DuplicateQuestion,
}

impl DbError {
    /// Map unique-constraint violations to `DuplicateQuestion`.
    pub(crate) fn from_insert(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Self::DuplicateQuestion
            }
            other => Self::Sqlite(other),
        }
    }
}
