//! Inputs to and outputs of the state transition function.

use crate::error::AppError;
use crate::models::{Country, EnrichedCountry, FavouriteEntry};
use crate::update::VersionCheck;

/// Everything that can change [`AppState`](super::AppState).
///
/// The first group are triggers from the presentation layer; the rest are
/// workflow results, tagged with the generation they were requested under.
#[derive(Debug, Clone)]
pub enum AppEvent {
    RequestCountries,
    SetSearchText(String),
    /// `None` or an unknown label clears the segment filter
    SelectSegment(Option<String>),
    SelectLetter(char),
    RequestIndicators(String),
    SelectCountry(String),
    ToggleFavourite(FavouriteEntry),
    RemoveFavourite(String),
    PersistFavourites,
    RequestVersionCheck,

    CountriesLoaded {
        generation: u64,
        result: Result<Vec<Country>, AppError>,
    },
    IndicatorsLoaded {
        generation: u64,
        code: String,
        result: Result<EnrichedCountry, AppError>,
    },
    VersionChecked {
        generation: u64,
        result: Result<VersionCheck, AppError>,
    },
    /// Stored favourites, already flag-normalised. `None` when nothing usable
    /// was stored.
    FavouritesHydrated(Option<Vec<FavouriteEntry>>),

    /// Stop the event loop
    Shutdown,
}

impl AppEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::RequestCountries => "request_countries",
            AppEvent::SetSearchText(_) => "set_search_text",
            AppEvent::SelectSegment(_) => "select_segment",
            AppEvent::SelectLetter(_) => "select_letter",
            AppEvent::RequestIndicators(_) => "request_indicators",
            AppEvent::SelectCountry(_) => "select_country",
            AppEvent::ToggleFavourite(_) => "toggle_favourite",
            AppEvent::RemoveFavourite(_) => "remove_favourite",
            AppEvent::PersistFavourites => "persist_favourites",
            AppEvent::RequestVersionCheck => "request_version_check",
            AppEvent::CountriesLoaded { .. } => "countries_loaded",
            AppEvent::IndicatorsLoaded { .. } => "indicators_loaded",
            AppEvent::VersionChecked { .. } => "version_checked",
            AppEvent::FavouritesHydrated(_) => "favourites_hydrated",
            AppEvent::Shutdown => "shutdown",
        }
    }
}

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchCountries { generation: u64 },
    FetchIndicators { generation: u64, code: String },
    CheckVersion { generation: u64 },
    /// Overwrite the stored favourites with this full set
    PersistFavourites { snapshot: Vec<FavouriteEntry> },
    HydrateFavourites,
}
