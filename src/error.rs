use thiserror::Error;

/// Errors returned by parcel store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No parcel has the requested number.
    #[error("parcel {0} not found")]
    NotFound(i64),

    /// A stored status is outside the known vocabulary.
    #[error("unknown parcel status: {0}")]
    UnknownStatus(String),

    /// Any failure reported by SQLite, passed through as-is.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
