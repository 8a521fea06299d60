//! HTTP client trait abstraction.
//!
//! The remote data sources are plain JSON documents served over HTTP GET.
//! Workflows only ever see this trait, so tests can swap in
//! [`MockHttpClient`](crate::adapters::mock::MockHttpClient).

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;

/// Request or response headers. Response header names are lowercase.
pub type Headers = HashMap<String, String>;

/// A fetched document, whatever its status.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self::with_headers(status, Headers::new(), body)
    }

    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A 200 carrying `body` as `application/json`.
    pub fn json_body(body: impl Into<String>) -> Self {
        let headers = Headers::from([(
            "content-type".to_string(),
            "application/json".to_string(),
        )]);
        Self::with_headers(200, headers, Bytes::from(body.into()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Text describing a failed status: the trimmed body, or `HTTP <status>`
    /// when the body is blank or not UTF-8.
    pub fn status_message(&self) -> String {
        self.text()
            .ok()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", self.status))
    }
}

/// Failure to obtain any response at all.
///
/// Non-2xx statuses are not errors at this level.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpError {
    /// Could not reach the host
    ConnectionFailed(String),
    Timeout(String),
    /// The URL could not be turned into a request
    InvalidUrl(String),
    /// Headers arrived but the body could not be read
    Body(String),
    Other(String),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "timed out: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "invalid URL: {}", msg),
            HttpError::Body(msg) => write!(f, "reading body failed: {}", msg),
            HttpError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Fetches remote documents.
///
/// # Example
///
/// ```
/// use who_drowning::traits::{Headers, HttpClient, HttpError};
///
/// async fn version_doc(client: &dyn HttpClient) -> Result<String, HttpError> {
///     let response = client
///         .get("https://example.org/v1/version.json", &Headers::new())
///         .await?;
///     Ok(response.status_message())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    ///
    /// A non-2xx status is returned as a normal [`Response`]; callers decide
    /// whether that is a failure.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
