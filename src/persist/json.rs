//! JSON document codec for full store state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::store::{Store, StoreSnapshot};

use super::PersistResult;

/// Reads and writes one store per file as a pretty-printed JSON document.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Binds a codec to `path`. No I/O happens until
    /// [`load`](JsonFile::load) or [`save`](JsonFile::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this codec reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the store saved at the bound path.
    ///
    /// A missing or unreadable file surfaces as
    /// [`Io`](crate::persist::PersistError::Io), a non-document as
    /// [`Malformed`](crate::persist::PersistError::Malformed), and a document
    /// carrying rejected values as
    /// [`Store`](crate::persist::PersistError::Store). No store is produced
    /// on any failure.
    pub fn load(&self) -> PersistResult<Store> {
        let text = fs::read_to_string(&self.path)?;
        let snapshot: StoreSnapshot = serde_json::from_str(&text)?;
        Ok(Store::from_snapshot(snapshot)?)
    }

    /// Saves the full state of `store` to the bound path, insertion order
    /// preserved. An invalid or unwritable destination surfaces as
    /// [`Io`](crate::persist::PersistError::Io).
    pub fn save(&self, store: &Store) -> PersistResult<()> {
        let text = serde_json::to_string_pretty(&store.export_snapshot())?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
