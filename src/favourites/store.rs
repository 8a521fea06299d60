use serde::Serialize;

use crate::models::FavouriteEntry;

/// The favourites set, keyed by `code`, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FavouritesState {
    items: Vec<FavouriteEntry>,
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// A resolved mutation, kept so it can be replayed onto another set.
#[derive(Debug, Clone, PartialEq)]
pub enum FavouriteChange {
    Added(FavouriteEntry),
    Removed(String),
}

impl FavouriteChange {
    /// Apply to `state`. Replaying an addition never removes an entry.
    pub fn apply(&self, state: &mut FavouritesState) {
        match self {
            FavouriteChange::Added(entry) => state.add(entry.clone()),
            FavouriteChange::Removed(code) => {
                state.remove(code);
            }
        }
    }
}

impl FavouritesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[FavouriteEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.items.iter().any(|item| item.code == code)
    }

    /// Remove the entry with the same code, or append `entry`.
    pub fn toggle(&mut self, entry: FavouriteEntry) -> Toggled {
        if self.contains(&entry.code) {
            self.items.retain(|item| item.code != entry.code);
            Toggled::Removed
        } else {
            self.items.push(entry);
            Toggled::Added
        }
    }

    /// Append `entry` unless its code is already present.
    pub fn add(&mut self, entry: FavouriteEntry) {
        if !self.contains(&entry.code) {
            self.items.push(entry);
        }
    }

    /// Remove by code. Returns whether anything was removed.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.code != code);
        self.items.len() != before
    }

    /// Replace the whole set. Later duplicates of a code are dropped.
    pub fn replace_all(&mut self, entries: Vec<FavouriteEntry>) {
        let mut items: Vec<FavouriteEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !items.iter().any(|item| item.code == entry.code) {
                items.push(entry);
            }
        }
        self.items = items;
    }

    /// Full copy of the current set, as written to storage.
    pub fn snapshot(&self) -> Vec<FavouriteEntry> {
        self.items.clone()
    }
}
