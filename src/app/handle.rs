use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::models::FavouriteEntry;
use crate::state::{AppEvent, AppState};

/// Cloneable front door to a running [`App`](super::App).
///
/// Trigger methods enqueue an event and return immediately; results are
/// observed through [`subscribe`](Self::subscribe). Each returns `false` once
/// the app has stopped.
#[derive(Debug, Clone)]
pub struct AppHandle {
    events: mpsc::UnboundedSender<AppEvent>,
    state: watch::Receiver<AppState>,
}

impl AppHandle {
    pub(crate) fn new(
        events: mpsc::UnboundedSender<AppEvent>,
        state: watch::Receiver<AppState>,
    ) -> Self {
        Self { events, state }
    }

    pub fn request_countries(&self) -> bool {
        self.send(AppEvent::RequestCountries)
    }

    pub fn set_search_text(&self, text: impl Into<String>) -> bool {
        self.send(AppEvent::SetSearchText(text.into()))
    }

    pub fn select_segment(&self, label: Option<&str>) -> bool {
        self.send(AppEvent::SelectSegment(label.map(str::to_string)))
    }

    pub fn select_letter(&self, letter: char) -> bool {
        self.send(AppEvent::SelectLetter(letter))
    }

    pub fn request_indicators(&self, code: impl Into<String>) -> bool {
        self.send(AppEvent::RequestIndicators(code.into()))
    }

    pub fn select_country(&self, code: impl Into<String>) -> bool {
        self.send(AppEvent::SelectCountry(code.into()))
    }

    pub fn toggle_favourite(&self, entry: FavouriteEntry) -> bool {
        self.send(AppEvent::ToggleFavourite(entry))
    }

    pub fn remove_favourite(&self, code: impl Into<String>) -> bool {
        self.send(AppEvent::RemoveFavourite(code.into()))
    }

    pub fn persist_favourites(&self) -> bool {
        self.send(AppEvent::PersistFavourites)
    }

    pub fn request_version_check(&self) -> bool {
        self.send(AppEvent::RequestVersionCheck)
    }

    /// Ask the event loop to stop after flushing favourites writes.
    pub fn shutdown(&self) -> bool {
        self.send(AppEvent::Shutdown)
    }

    /// Latest published state.
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// New receiver notified after every handled event.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.clone()
    }

    /// Wait until the published state satisfies `predicate`.
    ///
    /// Returns `None` if the app stops first.
    pub async fn wait_for(&self, predicate: impl FnMut(&AppState) -> bool) -> Option<AppState> {
        let mut rx = self.state.clone();
        rx.wait_for(predicate).await.ok().map(|state| state.clone())
    }

    fn send(&self, event: AppEvent) -> bool {
        let name = event.name();
        match self.events.send(event) {
            Ok(()) => true,
            Err(_) => {
                debug!(event = name, "App stopped, dropping trigger");
                false
            }
        }
    }
}
