//! Persistence error taxonomy and the JSON document codec.

/// JSON document codec.
pub mod json;

use crate::core::store::StoreError;

/// Failure while loading or saving a store document.
#[derive(Debug)]
pub enum PersistError {
    /// Source or destination could not be opened, read, or written.
    Io(std::io::Error),
    /// Document text does not parse as a store document.
    Malformed(serde_json::Error),
    /// Document parsed but carries values the data model rejects.
    Store(StoreError),
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

impl From<StoreError> for PersistError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Alias for persistence results.
pub type PersistResult<T> = Result<T, PersistError>;
