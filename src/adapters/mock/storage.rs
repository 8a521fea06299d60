//! In-memory key-value store for testing.
//!
//! Stores values in a map, records every write and can be told to fail reads
//! or writes, so persistence paths can be tested without touching disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::PersistenceError;
use crate::traits::KeyValueStore;

/// In-memory key-value store for testing.
///
/// # Example
///
/// ```
/// use who_drowning::adapters::mock::InMemoryStore;
/// use who_drowning::traits::KeyValueStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryStore::new();
/// assert!(store.get("favourites").await.unwrap().is_none());
///
/// store.set("favourites", "[]").await.unwrap();
/// assert_eq!(store.get("favourites").await.unwrap().as_deref(), Some("[]"));
/// assert_eq!(store.writes("favourites"), vec!["[]".to_string()]);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Current values
    values: Arc<Mutex<HashMap<String, String>>>,
    /// Every value written, per key, in order
    history: Arc<Mutex<HashMap<String, Vec<String>>>>,
    /// Whether get should fail
    get_should_fail: Arc<Mutex<bool>>,
    /// Whether set should fail
    set_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Configure whether get should fail.
    pub fn set_get_should_fail(&self, should_fail: bool) {
        *self.get_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether set should fail.
    pub fn set_set_should_fail(&self, should_fail: bool) {
        *self.set_should_fail.lock().unwrap() = should_fail;
    }

    /// Current value for a key, bypassing failure injection.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Every successful write for a key, oldest first.
    pub fn writes(&self, key: &str) -> Vec<String> {
        self.history
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of successful writes for a key.
    pub fn write_count(&self, key: &str) -> usize {
        self.writes(key).len()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if *self.get_should_fail.lock().unwrap() {
            return Err(PersistenceError::ReadFailed {
                key: key.to_string(),
                message: "Simulated read failure".to_string(),
            });
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if *self.set_should_fail.lock().unwrap() {
            return Err(PersistenceError::WriteFailed {
                key: key.to_string(),
                message: "Simulated write failure".to_string(),
            });
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.history
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        Ok(())
    }
}
