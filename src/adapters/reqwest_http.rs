//! `HttpClient` backed by reqwest.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Time allowed for a whole request, body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Production HTTP client.
///
/// # Example
///
/// ```no_run
/// use who_drowning::adapters::ReqwestHttpClient;
/// use who_drowning::traits::{Headers, HttpClient};
///
/// # async fn demo() -> Result<(), who_drowning::traits::HttpError> {
/// let client = ReqwestHttpClient::new();
/// let response = client
///     .get("https://who-drowning.adapptlabs.com/staging/v1/version.json", &Headers::new())
///     .await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let built = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("who-drowning/", env!("CARGO_PKG_VERSION")))
            .build();
        match built {
            Ok(client) => Self { client },
            Err(err) => {
                tracing::warn!(error = %err, "Falling back to default reqwest client");
                Self {
                    client: reqwest::Client::new(),
                }
            }
        }
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn transport_error(err: reqwest::Error) -> HttpError {
    let text = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(text)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(text)
    } else if err.is_builder() {
        HttpError::InvalidUrl(text)
    } else {
        HttpError::Other(text)
    }
}

/// Failure while streaming the body. A timeout stays a timeout.
fn body_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else {
        HttpError::Body(err.to_string())
    }
}

/// Lowercase names; values that are not visible ASCII are skipped.
fn response_headers(map: &HeaderMap) -> Headers {
    let mut headers = Headers::with_capacity(map.len());
    for (name, value) in map {
        if let Ok(value) = value.to_str() {
            headers.insert(name.as_str().to_ascii_lowercase(), value.to_string());
        }
    }
    headers
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |req, (name, value)| req.header(name, value));

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let headers = response_headers(response.headers());
        let body = response.bytes().await.map_err(body_error)?;

        Ok(Response::with_headers(status, headers, body))
    }
}
