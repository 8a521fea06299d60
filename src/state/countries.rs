use serde::Serialize;

use super::lifecycle::{Lifecycle, RequestTracker};
use crate::catalog::{filtered_sections, CountryFilter, Segment};
use crate::models::{Country, CountrySection};

/// Countries list slice.
///
/// `filtered_countries` and `grouped_countries` are always derived from
/// `countries` under the current `filter`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CountriesState {
    pub countries: Vec<Country>,
    pub filtered_countries: Vec<Country>,
    pub grouped_countries: Vec<CountrySection>,
    /// Current search text, empty when a segment or nothing is active
    pub search: String,
    pub selected_segment: Option<Segment>,
    pub filter: CountryFilter,
    pub lifecycle: Lifecycle,
    #[serde(skip)]
    pub(crate) requests: RequestTracker,
}

impl CountriesState {
    pub fn loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.lifecycle.error()
    }

    pub(crate) fn begin_request(&mut self) -> u64 {
        self.lifecycle = Lifecycle::InFlight;
        self.requests.begin()
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.requests.is_current(generation)
    }

    /// Install a fetched list and re-apply the active filter.
    pub(crate) fn resolve(&mut self, countries: Vec<Country>) {
        self.countries = countries;
        self.lifecycle = Lifecycle::Resolved;
        self.refilter();
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.lifecycle = Lifecycle::Failed { message };
    }

    /// Activate a search; clears any selected segment.
    pub(crate) fn set_search(&mut self, text: String) {
        self.selected_segment = None;
        self.filter = CountryFilter::Search(text.clone());
        self.search = text;
        self.refilter();
    }

    /// Activate a segment by label; clears any search text.
    ///
    /// Unknown or empty labels reset to the unfiltered list.
    pub(crate) fn select_segment(&mut self, label: Option<&str>) {
        self.search.clear();
        self.filter = CountryFilter::from_segment_label(label);
        self.selected_segment = match self.filter {
            CountryFilter::Segment(segment) => Some(segment),
            _ => None,
        };
        self.refilter();
    }

    /// Keep names starting with `letter`; clears search and segment.
    pub(crate) fn select_letter(&mut self, letter: char) {
        self.search.clear();
        self.selected_segment = None;
        self.filter = CountryFilter::Letter(letter);
        self.refilter();
    }

    fn refilter(&mut self) {
        let (filtered, sections) = filtered_sections(&self.countries, &self.filter);
        self.filtered_countries = filtered;
        self.grouped_countries = sections;
    }
}
