//! State transitions.
//!
//! [`reduce`] applies one event to the state and returns the side effects the
//! runtime must perform. It does no I/O.

use tracing::{debug, warn};

use super::events::{AppEvent, Effect};
use super::AppState;
use crate::error::AppError;
use crate::favourites::{FavouriteChange, Toggled};

/// Apply `event` to `state`.
pub fn reduce(state: &mut AppState, event: AppEvent) -> Vec<Effect> {
    match event {
        AppEvent::RequestCountries => {
            let generation = state.countries.begin_request();
            vec![Effect::FetchCountries { generation }]
        }
        AppEvent::SetSearchText(text) => {
            state.countries.set_search(text);
            Vec::new()
        }
        AppEvent::SelectSegment(label) => {
            state.countries.select_segment(label.as_deref());
            Vec::new()
        }
        AppEvent::SelectLetter(letter) => {
            state.countries.select_letter(letter);
            Vec::new()
        }
        AppEvent::RequestIndicators(code) => {
            let generation = state.indicators.begin_request(&code);
            vec![Effect::FetchIndicators { generation, code }]
        }
        AppEvent::SelectCountry(code) => {
            state.indicators.selected_code = Some(code);
            Vec::new()
        }
        AppEvent::ToggleFavourite(entry) => {
            let change = match state.favourites.toggle(entry.clone()) {
                Toggled::Added => FavouriteChange::Added(entry),
                Toggled::Removed => FavouriteChange::Removed(entry.code),
            };
            record(state, change)
        }
        AppEvent::RemoveFavourite(code) => {
            state.favourites.remove(&code);
            record(state, FavouriteChange::Removed(code))
        }
        AppEvent::PersistFavourites => {
            if state.favourites_loaded {
                persist(state)
            } else {
                debug!("Favourites not read yet, write deferred");
                Vec::new()
            }
        }
        AppEvent::RequestVersionCheck => {
            let generation = state.version.begin_request();
            vec![Effect::CheckVersion { generation }]
        }

        AppEvent::CountriesLoaded { generation, result } => {
            if !state.countries.is_current(generation) {
                debug!(generation, "Discarding stale countries result");
                return Vec::new();
            }
            match result {
                Ok(countries) => state.countries.resolve(countries),
                Err(err) => state.countries.fail(surface(&err, "countries")),
            }
            Vec::new()
        }
        AppEvent::IndicatorsLoaded {
            generation,
            code,
            result,
        } => {
            if !state.indicators.is_current(generation) {
                debug!(generation, code = %code, "Discarding stale indicators result");
                return Vec::new();
            }
            match result {
                Ok(profile) => state.indicators.resolve(profile),
                Err(err) => state.indicators.fail(surface(&err, "indicators")),
            }
            Vec::new()
        }
        AppEvent::VersionChecked { generation, result } => {
            if !state.version.is_current(generation) {
                debug!(generation, "Discarding stale version result");
                return Vec::new();
            }
            match result {
                Ok(check) => state.version.resolve(check),
                Err(err) => {
                    warn!(code = err.error_code(), "Version check failed: {}", err);
                    state.version.fail(err.user_message());
                }
            }
            Vec::new()
        }
        AppEvent::FavouritesHydrated(entries) => {
            let pending = std::mem::take(&mut state.pending_favourites);
            if let Some(entries) = entries {
                state.favourites.replace_all(entries);
                for change in &pending {
                    change.apply(&mut state.favourites);
                }
            }
            state.favourites_loaded = true;
            if pending.is_empty() {
                Vec::new()
            } else {
                debug!(changes = pending.len(), "Replayed early favourites changes");
                persist(state)
            }
        }
        AppEvent::Shutdown => Vec::new(),
    }
}

/// Persist now, or hold the change until the stored set has been read so
/// the write cannot clobber it.
fn record(state: &mut AppState, change: FavouriteChange) -> Vec<Effect> {
    if state.favourites_loaded {
        persist(state)
    } else {
        state.pending_favourites.push(change);
        Vec::new()
    }
}

fn persist(state: &AppState) -> Vec<Effect> {
    vec![Effect::PersistFavourites {
        snapshot: state.favourites.snapshot(),
    }]
}

fn surface(err: &AppError, workflow: &str) -> String {
    warn!(
        workflow,
        code = err.error_code(),
        category = %err.category(),
        "Fetch failed: {}",
        err
    );
    err.user_message()
}
