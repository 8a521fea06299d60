//! Application state container.
//!
//! [`App`] owns the [`AppState`], a queue of [`AppEvent`]s and the effect
//! runner. Events are handled one at a time: the reducer updates the state,
//! the requested effects are started, and the new state is published on a
//! watch channel. Workflow results come back through the same queue.

mod effects;
mod handle;

pub use handle::AppHandle;

use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::WhoApiClient;
use crate::config::ClientConfig;
use crate::favourites::FavouritesRepository;
use crate::state::{reduce, AppEvent, AppState, Effect};
use crate::traits::{HttpClient, KeyValueStore};
use effects::EffectRunner;

pub struct App {
    state: AppState,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    state_tx: watch::Sender<AppState>,
    effects: EffectRunner,
}

impl App {
    /// Build the container and start reading stored favourites.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let config = Arc::new(config);
        let api = WhoApiClient::new(http, config.clone());
        let favourites = FavouritesRepository::new(store, config.favourites_key.clone());

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let state = AppState::new(config.current_version.clone());
        let (state_tx, _) = watch::channel(state.clone());

        let mut effects = EffectRunner::new(api, favourites, event_tx.clone());
        effects.run(Effect::HydrateFavourites);

        info!(api = %config.api_base_url, version = %config.current_version, "App initialised");

        Self {
            state,
            event_tx,
            event_rx,
            state_tx,
            effects,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn handle(&self) -> AppHandle {
        AppHandle::new(self.event_tx.clone(), self.state_tx.subscribe())
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state_tx.subscribe()
    }

    /// Handle one event synchronously.
    ///
    /// Returns `false` for [`AppEvent::Shutdown`].
    pub fn dispatch(&mut self, event: AppEvent) -> bool {
        debug!(event = event.name(), "Handling event");
        let keep_running = !matches!(event, AppEvent::Shutdown);

        for effect in reduce(&mut self.state, event) {
            self.effects.run(effect);
        }
        self.state_tx.send_replace(self.state.clone());

        keep_running
    }

    /// Wait for the next queued event and handle it.
    pub async fn process_next(&mut self) -> bool {
        match self.event_rx.recv().await {
            Some(event) => self.dispatch(event),
            None => false,
        }
    }

    /// Handle events until `predicate` holds for the current state.
    pub async fn run_until(&mut self, mut predicate: impl FnMut(&AppState) -> bool) -> &AppState {
        while !predicate(&self.state) {
            if !self.process_next().await {
                break;
            }
        }
        &self.state
    }

    /// Handle events until shutdown, then flush favourites writes.
    pub async fn run(mut self) {
        while self.process_next().await {}
        self.shutdown().await;
    }

    /// Run the event loop on its own task.
    pub fn spawn(self) -> (AppHandle, JoinHandle<()>) {
        let handle = self.handle();
        let task = tokio::spawn(self.run());
        (handle, task)
    }

    /// Wait for queued favourites writes and cancel in-flight fetches.
    pub async fn shutdown(mut self) {
        self.effects.close().await;
        info!("App stopped");
    }
}
