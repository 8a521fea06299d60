//! Common test utilities for integration tests.
//!
//! Fixture documents shaped like the remote API, a config pointing at a fake
//! API root, and a builder for an [`App`] wired to mocks.
//!
//! # Example
//!
//! ```ignore
//! use common::{TestAppBuilder, countries_json};
//!
//! let app = TestAppBuilder::new()
//!     .with_document("countries-en.json", countries_json())
//!     .build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use who_drowning::app::App;
use who_drowning::config::ClientConfig;

/// API root used by every mock-backed test.
pub const TEST_API: &str = "http://api.test/v1";

/// Version reported by test apps.
pub const TEST_VERSION: &str = "1.0.0";

/// Full URL of a document under [`TEST_API`].
pub fn url(document: &str) -> String {
    format!("{}/{}", TEST_API, document)
}

/// Config pointing at [`TEST_API`].
pub fn test_config() -> ClientConfig {
    ClientConfig::default()
        .with_api_base_url(TEST_API)
        .with_current_version(TEST_VERSION)
}

/// Countries list with both flag spellings and an out-of-order name.
pub fn countries_json() -> &'static str {
    r#"[
        {"iso": "FR", "name": "France", "region": "Europe", "flag": "FR"},
        {"iso": "DEU", "name": "Germany", "region": "Europe"},
        {"iso": "KE", "name": "Kenya", "region": "Africa", "flag": "ke"},
        {"iso": "BR", "name": "Brazil", "region": "Americas"},
        {"iso": "ZM", "name": "Zambia", "region": "Africa"},
        {"iso": "BD", "name": "Bangladesh", "region": "Asia"}
    ]"#
}

/// Indicator dataset with a full record for KE and a sparse one for BR.
pub fn indicators_json() -> &'static str {
    r#"[
        {
            "iso": "KE",
            "name": "Kenya",
            "region": "Africa",
            "flag": "KE",
            "indicators": {"mortality_rate": 4.5, "national_strategy": "YES"},
            "progress": {"burden": 55, "policy": 120},
            "trendsChart": [[10, 9, 8], [6, 5, 5], [4, 4, 3]],
            "pieChart": {"values": [1, 2, 3, 4, 5, 6]}
        },
        {"iso": "BR", "name": "Brazil"}
    ]"#
}

/// Two domains with values for KE and one with none.
pub fn domains_json() -> &'static str {
    r##"[
        {
            "unique_key": "burden",
            "key": "Burden",
            "label": "Burden",
            "color": "#1f77b4",
            "child": [{"unique_key": "mortality_rate", "label": "Mortality rate"}]
        },
        {
            "unique_key": "policy",
            "label": "Policy",
            "child": [
                {"unique_key": "national_strategy", "label": "National strategy"},
                {"unique_key": "lead_agency", "label": "Lead agency"}
            ]
        },
        {
            "unique_key": "water_safety",
            "label": "Water safety",
            "child": [{"unique_key": "swim_lessons", "label": "Swim lessons"}]
        }
    ]"##
}

pub fn version_json(version: &str) -> String {
    format!(r#"{{"version": "{}"}}"#, version)
}

/// Builder for test [`App`] instances backed by mocks.
pub struct TestAppBuilder {
    config: ClientConfig,
    http: MockHttpClient,
    store: InMemoryStore,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: test_config(),
            http: MockHttpClient::new(),
            store: InMemoryStore::new(),
        }
    }

    /// Serve `body` for a document under [`TEST_API`].
    pub fn with_document(self, document: &str, body: impl Into<String>) -> Self {
        let http = self.http.with_response(&url(document), Response::json_body(body));
        Self { http, ..self }
    }

    /// Serve the four standard fixture documents.
    pub fn with_fixtures(self) -> Self {
        self.with_document("countries-en.json", countries_json())
            .with_document("countryIndicators.json", indicators_json())
            .with_document("indicators-en.json", domains_json())
            .with_document("version.json", version_json(TEST_VERSION))
    }

    pub fn with_http(self, http: MockHttpClient) -> Self {
        Self { http, ..self }
    }

    pub fn with_store(self, store: InMemoryStore) -> Self {
        Self { store, ..self }
    }

    pub fn with_config(self, config: ClientConfig) -> Self {
        Self { config, ..self }
    }

    /// Build the app. Must run inside a tokio runtime.
    pub fn build(self) -> App {
        App::new(self.config, Arc::new(self.http), Arc::new(self.store))
    }

    /// Build the app and keep the mocks for inspection.
    pub fn build_with_mocks(self) -> (App, MockHttpClient, InMemoryStore) {
        let http = self.http.clone();
        let store = self.store.clone();
        (self.build(), http, store)
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
