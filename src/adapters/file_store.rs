//! File-backed key-value store adapter.
//!
//! Each key is one file under the data directory. Writes go to a temporary
//! sibling first and are renamed into place, so a reader sees either the old
//! snapshot or the new one.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::default_data_dir;
use crate::error::PersistenceError;
use crate::traits::KeyValueStore;

/// File-based key-value store.
///
/// Values are stored in `<data dir>/<key>.json`.
///
/// # Example
///
/// ```no_run
/// use who_drowning::adapters::FileKeyValueStore;
/// use who_drowning::traits::KeyValueStore;
///
/// # async fn demo() -> Result<(), who_drowning::error::PersistenceError> {
/// let store = FileKeyValueStore::new()?;
/// store.set("favourites", "[]").await?;
/// assert_eq!(store.get("favourites").await?.as_deref(), Some("[]"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store in the platform data directory.
    pub fn new() -> Result<Self, PersistenceError> {
        default_data_dir()
            .map(Self::with_dir)
            .ok_or(PersistenceError::NoDataDirectory)
    }

    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `key`. Characters outside `[A-Za-z0-9_-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::ReadFailed {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let write_failed = |e: std::io::Error| PersistenceError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        };

        fs::create_dir_all(&self.dir).await.map_err(write_failed)?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await.map_err(write_failed)?;
        fs::rename(&tmp, &path).await.map_err(write_failed)
    }
}
