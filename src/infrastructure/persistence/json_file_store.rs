//! JSON document store with atomic whole-file replacement.

use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// The documents kept by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Approved,
    Queue,
    Requests,
}

impl Collection {
    /// File name inside the store's base directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Approved => "approved_clones.json",
            Self::Queue => "queue.json",
            Self::Requests => "requests.json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Queue => "queue",
            Self::Requests => "requests",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by [`JsonFileStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {collection}: {source}")]
    Read {
        collection: Collection,
        source: io::Error,
    },

    #[error("failed to write {collection}: {source}")]
    Write {
        collection: Collection,
        source: io::Error,
    },

    #[error("{collection} document is corrupt: {source}")]
    Corrupt {
        collection: Collection,
        source: serde_json::Error,
    },

    #[error("failed to serialize {collection}: {source}")]
    Serialize {
        collection: Collection,
        source: serde_json::Error,
    },

    #[error("storage task for {collection} did not complete")]
    Join { collection: Collection },
}

impl StoreError {
    /// Name of the collection the failed operation targeted.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Read { collection, .. }
            | Self::Write { collection, .. }
            | Self::Corrupt { collection, .. }
            | Self::Serialize { collection, .. }
            | Self::Join { collection } => collection.as_str(),
        }
    }
}

/// Stores each [`Collection`] as one pretty-printed JSON file under a base
/// directory.
///
/// # Durability
///
/// `save` writes into a temporary file in the same directory, syncs it and
/// renames it over the target. Readers see either the previous document or
/// the new one, never a torn write. Concurrent saves of one collection are
/// last-writer-wins.
///
/// The base directory is created on the first save; loading from a missing
/// directory returns defaults.
///
/// All methods block; async callers go through `spawn_blocking`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.base_dir.join(collection.file_name())
    }

    /// Loads a collection, or `T::default()` if it was never saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] on I/O failure and [`StoreError::Corrupt`]
    /// when the document exists but does not parse. A corrupt document is
    /// left in place.
    pub fn load<T>(&self, collection: Collection) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_for(collection);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
            Err(source) => return Err(StoreError::Read { collection, source }),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt { collection, source })
    }

    /// Replaces a collection with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if `value` cannot be encoded and
    /// [`StoreError::Write`] on any filesystem failure. The previous document
    /// is untouched on error.
    pub fn save<T>(&self, collection: Collection, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let content = serde_json::to_vec_pretty(value)
            .map_err(|source| StoreError::Serialize { collection, source })?;

        let write_err = |source: io::Error| StoreError::Write { collection, source };

        fs::create_dir_all(&self.base_dir).map_err(write_err)?;

        let mut temp_file = NamedTempFile::new_in(&self.base_dir).map_err(write_err)?;
        temp_file.write_all(&content).map_err(write_err)?;
        temp_file.as_file().sync_all().map_err(write_err)?;

        temp_file
            .persist(self.path_for(collection))
            .map_err(|e| write_err(e.error))?;

        Ok(())
    }

    /// True when the base directory is readable, or does not exist yet.
    pub fn is_healthy(&self) -> bool {
        match fs::metadata(&self.base_dir) {
            Ok(meta) => meta.is_dir() && fs::read_dir(&self.base_dir).is_ok(),
            Err(e) => e.kind() == io::ErrorKind::NotFound,
        }
    }
}
