//! Client for the remote JSON documents.
//!
//! Wraps an [`HttpClient`] with the configured API root and turns transport
//! failures, non-2xx statuses and malformed bodies into [`AppError`]s.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{AppError, AppResult, NetworkError};
use crate::models::{Country, DomainDefinition, IndicatorRecord, VersionInfo};
use crate::traits::{Headers, HttpClient};

/// Client for the WHO drowning API.
#[derive(Clone)]
pub struct WhoApiClient {
    http: Arc<dyn HttpClient>,
    config: Arc<ClientConfig>,
}

impl WhoApiClient {
    pub fn new(http: Arc<dyn HttpClient>, config: Arc<ClientConfig>) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the countries list. Flags come back normalised.
    pub async fn fetch_countries(&self) -> AppResult<Vec<Country>> {
        let countries: Vec<Country> = self.get_json(&self.config.endpoints.countries).await?;
        Ok(countries
            .into_iter()
            .map(Country::with_normalized_flag)
            .collect())
    }

    /// Fetch the per-country indicator dataset.
    pub async fn fetch_indicator_records(&self) -> AppResult<Vec<IndicatorRecord>> {
        self.get_json(&self.config.endpoints.indicators).await
    }

    /// Fetch the domain definitions.
    pub async fn fetch_domain_definitions(&self) -> AppResult<Vec<DomainDefinition>> {
        self.get_json(&self.config.endpoints.domains).await
    }

    pub async fn fetch_version(&self) -> AppResult<VersionInfo> {
        self.get_json(&self.config.endpoints.version).await
    }

    async fn get_json<T: DeserializeOwned>(&self, document: &str) -> AppResult<T> {
        let url = self.config.url_for(document);
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        debug!(url = %url, "GET");
        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;

        if !response.is_success() {
            warn!(url = %url, status = response.status, "Remote document request failed");
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message: response.status_message(),
            }
            .into());
        }

        response
            .json::<T>()
            .map_err(|e| AppError::parse(document, e.to_string()))
    }
}
