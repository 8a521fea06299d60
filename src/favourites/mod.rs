//! Favourites store.
//!
//! [`FavouritesState`] is the in-memory set with toggle/remove/replace
//! semantics; [`FavouritesRepository`] persists full snapshots through a
//! [`KeyValueStore`](crate::traits::KeyValueStore).

mod persistence;
mod store;

pub use persistence::FavouritesRepository;
pub use store::{FavouriteChange, FavouritesState, Toggled};
