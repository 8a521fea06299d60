//! Effect runner: performs the I/O requested by state transitions.
//!
//! Fetch workflows are spawned tasks that post their result back on the event
//! channel. Starting a fetch aborts the previous one for the same workflow;
//! the generation check in the reducer covers results that were already
//! queued. Favourites writes go through a single worker so they land in the
//! order they were requested.

use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info};

use crate::api::WhoApiClient;
use crate::error::LogErr;
use crate::favourites::FavouritesRepository;
use crate::indicators::load_country_profile;
use crate::models::FavouriteEntry;
use crate::state::{AppEvent, Effect};
use crate::update::check_for_update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Workflow {
    Countries,
    Indicators,
    Version,
}

pub(crate) struct EffectRunner {
    api: WhoApiClient,
    favourites: FavouritesRepository,
    events: mpsc::UnboundedSender<AppEvent>,
    persist_tx: Option<mpsc::UnboundedSender<Vec<FavouriteEntry>>>,
    persist_worker: Option<JoinHandle<()>>,
    in_flight: HashMap<Workflow, AbortHandle>,
}

impl EffectRunner {
    /// Must be called from within a tokio runtime.
    pub(crate) fn new(
        api: WhoApiClient,
        favourites: FavouritesRepository,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let (persist_tx, persist_worker) = spawn_persistence_worker(favourites.clone());
        Self {
            api,
            favourites,
            events,
            persist_tx: Some(persist_tx),
            persist_worker: Some(persist_worker),
            in_flight: HashMap::new(),
        }
    }

    pub(crate) fn run(&mut self, effect: Effect) {
        match effect {
            Effect::FetchCountries { generation } => {
                let api = self.api.clone();
                let events = self.events.clone();
                self.spawn_latest(Workflow::Countries, async move {
                    info!(generation, "Fetching countries");
                    let result = api.fetch_countries().await;
                    if let Ok(countries) = &result {
                        info!(generation, count = countries.len(), "Fetched countries");
                    }
                    let _ = events.send(AppEvent::CountriesLoaded { generation, result });
                });
            }
            Effect::FetchIndicators { generation, code } => {
                let api = self.api.clone();
                let events = self.events.clone();
                self.spawn_latest(Workflow::Indicators, async move {
                    info!(generation, code = %code, "Fetching indicators");
                    let result = load_country_profile(&api, &code).await;
                    let _ = events.send(AppEvent::IndicatorsLoaded {
                        generation,
                        code,
                        result,
                    });
                });
            }
            Effect::CheckVersion { generation } => {
                let api = self.api.clone();
                let events = self.events.clone();
                self.spawn_latest(Workflow::Version, async move {
                    let result = check_for_update(&api).await;
                    let _ = events.send(AppEvent::VersionChecked { generation, result });
                });
            }
            Effect::PersistFavourites { snapshot } => match &self.persist_tx {
                Some(tx) => {
                    let _ = tx.send(snapshot);
                }
                None => debug!("Persistence worker closed, dropping favourites write"),
            },
            Effect::HydrateFavourites => {
                let favourites = self.favourites.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let entries = favourites
                        .load()
                        .await
                        .log_err("Loading favourites")
                        .flatten();
                    let _ = events.send(AppEvent::FavouritesHydrated(entries));
                });
            }
        }
    }

    fn spawn_latest<F>(&mut self, workflow: Workflow, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        if let Some(previous) = self.in_flight.remove(&workflow) {
            if !previous.is_finished() {
                debug!(?workflow, "Superseding in-flight request");
                previous.abort();
            }
        }
        let handle = tokio::spawn(task);
        self.in_flight.insert(workflow, handle.abort_handle());
    }

    /// Stop accepting writes and wait for queued ones to finish.
    pub(crate) async fn close(&mut self) {
        self.persist_tx.take();
        if let Some(worker) = self.persist_worker.take() {
            let _ = worker.await;
        }
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
    }
}

/// Writes snapshots one at a time, in arrival order. Failures are logged and
/// dropped; the in-memory set stays authoritative.
fn spawn_persistence_worker(
    favourites: FavouritesRepository,
) -> (mpsc::UnboundedSender<Vec<FavouriteEntry>>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<FavouriteEntry>>();
    let worker = tokio::spawn(async move {
        while let Some(snapshot) = rx.recv().await {
            favourites.save(&snapshot).await.log_err("Saving favourites");
        }
        debug!("Favourites persistence worker stopped");
    });
    (tx, worker)
}
