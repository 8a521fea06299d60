//! Client configuration.
//!
//! Defaults point at the staging API. Every field can be overridden with a
//! `with_*` builder method or, for deployment, an environment variable read
//! by [`ClientConfig::from_env`].

use std::path::PathBuf;
use tracing::warn;

/// Default API root, without trailing slash.
pub const DEFAULT_API_BASE_URL: &str = "https://who-drowning.adapptlabs.com/staging/v1";

/// First year of the trend series.
pub const DEFAULT_BASE_YEAR: i32 = 2000;

/// Tracing directive used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Storage key of the favourites snapshot.
pub const DEFAULT_FAVOURITES_KEY: &str = "favourites";

pub const ENV_API_URL: &str = "WHO_DROWNING_API_URL";
pub const ENV_BASE_YEAR: &str = "WHO_DROWNING_BASE_YEAR";
pub const ENV_APP_VERSION: &str = "WHO_DROWNING_APP_VERSION";
pub const ENV_DATA_DIR: &str = "WHO_DROWNING_DATA_DIR";

/// Remote document names, relative to the API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub countries: String,
    pub indicators: String,
    pub domains: String,
    pub version: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            countries: "countries-en.json".to_string(),
            indicators: "countryIndicators.json".to_string(),
            domains: "indicators-en.json".to_string(),
            version: "version.json".to_string(),
        }
    }
}

/// Configuration for the client core.
///
/// # Example
///
/// ```
/// use who_drowning::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_api_base_url("http://localhost:8080/v1/")
///     .with_base_year(1990);
///
/// assert_eq!(config.url_for("version.json"), "http://localhost:8080/v1/version.json");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, stored without trailing slash
    pub api_base_url: String,
    pub endpoints: Endpoints,
    /// Year of the first trend value
    pub base_year: i32,
    /// Version compared against the remote version document
    pub current_version: String,
    /// Key-value store key holding the favourites snapshot
    pub favourites_key: String,
    /// Directory for the file-backed key-value store
    pub data_dir: Option<PathBuf>,
    /// Default tracing directive when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            endpoints: Endpoints::default(),
            base_year: DEFAULT_BASE_YEAR,
            current_version: env!("CARGO_PKG_VERSION").to_string(),
            favourites_key: DEFAULT_FAVOURITES_KEY.to_string(),
            data_dir: default_data_dir(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root. A trailing slash is dropped.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_base_year(mut self, year: i32) -> Self {
        self.base_year = year;
        self
    }

    pub fn with_current_version(mut self, version: impl Into<String>) -> Self {
        self.current_version = version.into();
        self
    }

    pub fn with_favourites_key(mut self, key: impl Into<String>) -> Self {
        self.favourites_key = key.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Full URL for a document name.
    pub fn url_for(&self, document: &str) -> String {
        format!("{}/{}", self.api_base_url, document.trim_start_matches('/'))
    }

    /// Create config from the `WHO_DROWNING_*` environment variables.
    ///
    /// Unset or empty variables keep the default; an unparsable base year is
    /// reported and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = env_value(ENV_API_URL) {
            config = config.with_api_base_url(url);
        }

        if let Some(raw) = env_value(ENV_BASE_YEAR) {
            match raw.parse::<i32>() {
                Ok(year) => config.base_year = year,
                Err(_) => warn!(
                    value = %raw,
                    default = DEFAULT_BASE_YEAR,
                    "Ignoring invalid {}", ENV_BASE_YEAR
                ),
            }
        }

        if let Some(version) = env_value(ENV_APP_VERSION) {
            config.current_version = version;
        }

        if let Some(dir) = env_value(ENV_DATA_DIR) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Platform data directory for this application, if the platform has one.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("who-drowning"))
}
