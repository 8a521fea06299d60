//! Snapshot persistence of the favourites set.

use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{AppResult, PersistenceError};
use crate::models::FavouriteEntry;
use crate::traits::KeyValueStore;

/// Reads and writes the favourites snapshot under one key.
///
/// The whole set is written every time; there are no incremental updates.
#[derive(Clone)]
pub struct FavouritesRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl FavouritesRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored snapshot.
    ///
    /// `Ok(None)` when nothing has been stored yet. Every entry's flag is
    /// re-normalised.
    pub async fn load(&self) -> AppResult<Option<Vec<FavouriteEntry>>> {
        let Some(raw) = self.store.get(&self.key).await? else {
            debug!(key = %self.key, "No stored favourites");
            return Ok(None);
        };

        let entries: Vec<FavouriteEntry> =
            serde_json::from_str(&raw).map_err(|e| PersistenceError::Serialization {
                key: self.key.clone(),
                message: e.to_string(),
            })?;

        info!(count = entries.len(), "Loaded favourites");
        Ok(Some(
            entries
                .into_iter()
                .map(FavouriteEntry::with_normalized_flag)
                .collect(),
        ))
    }

    /// Overwrite the stored snapshot with `entries`.
    pub async fn save(&self, entries: &[FavouriteEntry]) -> AppResult<()> {
        let raw = serde_json::to_string(entries).map_err(|e| PersistenceError::Serialization {
            key: self.key.clone(),
            message: e.to_string(),
        })?;
        self.store.set(&self.key, &raw).await?;
        debug!(count = entries.len(), "Saved favourites");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;
    use crate::error::AppError;

    fn repo(store: &InMemoryStore) -> FavouritesRepository {
        FavouritesRepository::new(Arc::new(store.clone()), "favourites")
    }

    #[tokio::test]
    async fn test_load_empty_store() {
        let store = InMemoryStore::new();
        assert_eq!(repo(&store).load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_normalises_flags() {
        let store = InMemoryStore::with_value(
            "favourites",
            r#"[{"code":"FRA","name":"France","region":"Europe","flag":"FR"},{"code":"KEN","name":"Kenya","region":"Africa","flag":null}]"#,
        );
        let entries = repo(&store).load().await.unwrap().unwrap();
        assert_eq!(entries[0].flag.as_deref(), Some("fr"));
        assert_eq!(entries[1].flag.as_deref(), Some("ke"));
    }

    #[tokio::test]
    async fn test_load_malformed_is_serialization_error() {
        let store = InMemoryStore::with_value("favourites", "{oops");
        let err = repo(&store).load().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Persistence(PersistenceError::Serialization { .. })
        ));
    }

    #[tokio::test]
    async fn test_save_overwrites_full_snapshot() {
        let store = InMemoryStore::new();
        let repo = repo(&store);
        let fr = FavouriteEntry::new("FR", "France").with_flag("fr");
        let de = FavouriteEntry::new("DE", "Germany").with_flag("de");

        repo.save(&[fr.clone(), de.clone()]).await.unwrap();
        repo.save(&[de.clone()]).await.unwrap();

        assert_eq!(store.write_count("favourites"), 2);
        assert_eq!(repo.load().await.unwrap(), Some(vec![de]));
    }

    #[tokio::test]
    async fn test_save_failure_surfaces_as_persistence_error() {
        let store = InMemoryStore::new();
        store.set_set_should_fail(true);
        let err = repo(&store).save(&[]).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Persistence(PersistenceError::WriteFailed { .. })
        ));
    }
}
