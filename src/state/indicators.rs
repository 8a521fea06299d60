use serde::Serialize;

use super::lifecycle::{Lifecycle, RequestTracker};
use crate::models::EnrichedCountry;

/// Country profile slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorsState {
    /// Merged profile of the most recent successful request
    pub selected_country: Option<EnrichedCountry>,
    /// Code passed to the most recent request
    pub requested_code: Option<String>,
    /// Code recorded by `select_country`
    pub selected_code: Option<String>,
    pub lifecycle: Lifecycle,
    #[serde(skip)]
    pub(crate) requests: RequestTracker,
}

impl IndicatorsState {
    pub fn loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.lifecycle.error()
    }

    pub(crate) fn begin_request(&mut self, code: &str) -> u64 {
        self.requested_code = Some(code.to_string());
        self.lifecycle = Lifecycle::InFlight;
        self.requests.begin()
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.requests.is_current(generation)
    }

    pub(crate) fn resolve(&mut self, profile: EnrichedCountry) {
        self.selected_country = Some(profile);
        self.lifecycle = Lifecycle::Resolved;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.lifecycle = Lifecycle::Failed { message };
    }
}
