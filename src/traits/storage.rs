//! Key-value blob store trait abstraction.
//!
//! Local persistence is treated as an opaque string store. The favourites
//! snapshot is the only thing written through it.

use async_trait::async_trait;

use crate::error::PersistenceError;

/// Trait for a string key-value store.
///
/// `set` always overwrites the previous value for the key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if nothing is stored under the key
    /// - `Err(error)` if reading failed
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}
