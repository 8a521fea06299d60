//! Application state.
//!
//! One slice per workflow. Slices change only through [`reduce`], which
//! returns [`Effect`]s for the runtime in [`crate::app`] to perform.
//!
//! - [`CountriesState`]: list, filter criteria, sections
//! - [`IndicatorsState`]: merged country profile
//! - [`FavouritesState`]: favourites set
//! - [`VersionState`]: version gate

mod countries;
mod events;
mod indicators;
mod lifecycle;
mod reducer;
mod version;

pub use countries::CountriesState;
pub use events::{AppEvent, Effect};
pub use indicators::IndicatorsState;
pub use lifecycle::{Lifecycle, RequestTracker};
pub use reducer::reduce;
pub use version::VersionState;

pub use crate::favourites::{FavouriteChange, FavouritesState};

use serde::Serialize;

/// Snapshot of every slice, as published to observers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub countries: CountriesState,
    pub indicators: IndicatorsState,
    pub favourites: FavouritesState,
    /// Whether the stored favourites have been read
    pub favourites_loaded: bool,
    /// Mutations made before the stored set was read, replayed onto it
    #[serde(skip)]
    pub pending_favourites: Vec<FavouriteChange>,
    pub version: VersionState,
}

impl AppState {
    pub fn new(current_version: impl Into<String>) -> Self {
        Self {
            version: VersionState::new(current_version),
            ..Self::default()
        }
    }
}
