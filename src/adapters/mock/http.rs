//! Mock HTTP client for testing.
//!
//! Serves canned documents by exact URL. A response can be fixed, queued for
//! a single use, or delayed, which is enough to replay overlapping requests
//! in tests running on paused tokio time.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A request seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
    /// Sleep, then answer with the inner response
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    pub fn delayed(delay: Duration, response: MockResponse) -> Self {
        MockResponse::Delayed(delay, Box::new(response))
    }

    async fn resolve(self) -> Result<Response, HttpError> {
        let mut current = self;
        loop {
            match current {
                MockResponse::Success(response) => return Ok(response),
                MockResponse::Error(err) => return Err(err),
                MockResponse::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    current = *inner;
                }
            }
        }
    }
}

#[derive(Debug, Default)]
struct Routes {
    /// Served every time, after the queue for the URL is drained
    fixed: HashMap<String, MockResponse>,
    /// Served once each, oldest first
    queued: HashMap<String, VecDeque<MockResponse>>,
    /// Served for URLs with nothing configured
    fallback: Option<MockResponse>,
}

impl Routes {
    fn next(&mut self, url: &str) -> Option<MockResponse> {
        self.queued
            .get_mut(url)
            .and_then(VecDeque::pop_front)
            .or_else(|| self.fixed.get(url).cloned())
            .or_else(|| self.fallback.clone())
    }
}

/// Mock HTTP client for testing.
///
/// Clones share routes and the request log.
///
/// # Example
///
/// ```
/// use who_drowning::adapters::mock::MockHttpClient;
/// use who_drowning::traits::{Headers, HttpClient, Response};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let client = MockHttpClient::new()
///     .with_response("https://api.test/version.json", Response::json_body(r#"{"version":"1.0"}"#));
///
/// let response = client.get("https://api.test/version.json", &Headers::new()).await.unwrap();
/// assert_eq!(response.status, 200);
/// assert_eq!(client.request_count("https://api.test/version.json"), 1);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, url: &str, response: Response) -> Self {
        self.set_response(url, MockResponse::Success(response));
        self
    }

    pub fn with_error(self, url: &str, error: HttpError) -> Self {
        self.set_response(url, MockResponse::Error(error));
        self
    }

    /// Answer every request for `url` with `response`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut routes = self.routes.lock().unwrap();
        routes.fixed.insert(url.to_string(), response);
    }

    /// Answer the next request for `url` with `response`, once.
    pub fn push_response(&self, url: &str, response: MockResponse) {
        let mut routes = self.routes.lock().unwrap();
        routes
            .queued
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Answer requests for unconfigured URLs with `response`.
    pub fn set_default_response(&self, response: MockResponse) {
        self.routes.lock().unwrap().fallback = Some(response);
    }

    pub fn clear_responses(&self) {
        *self.routes.lock().unwrap() = Routes::default();
    }

    /// Every request so far, oldest first.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url == url)
            .count()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        // Bind first so the lock is released before any delay.
        let next = self.routes.lock().unwrap().next(url);
        match next {
            Some(response) => response.resolve().await,
            None => Err(HttpError::Other(format!("no mock response for {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    const URL: &str = "https://example.com/countries-en.json";

    async fn body(client: &MockHttpClient, url: &str) -> String {
        client
            .get(url, &Headers::new())
            .await
            .unwrap()
            .text()
            .unwrap()
    }

    #[tokio::test]
    async fn test_fixed_response_and_recording() {
        let client = MockHttpClient::new().with_response(URL, Response::json_body("[]"));
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = client.get(URL, &headers).await.unwrap();
        assert_eq!(response.body, Bytes::from("[]"));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, URL);
        assert_eq!(requests[0].headers.get("Accept").map(String::as_str), Some("application/json"));
    }

    #[tokio::test]
    async fn test_error_response() {
        let client =
            MockHttpClient::new().with_error(URL, HttpError::Timeout("slow".to_string()));
        let result = client.get(URL, &Headers::new()).await;
        assert_eq!(result.unwrap_err(), HttpError::Timeout("slow".to_string()));
    }

    #[tokio::test]
    async fn test_unconfigured_url_is_error() {
        let client = MockHttpClient::new().with_response(URL, Response::json_body("[]"));
        let result = client
            .get("https://example.com/countries-en.json/extra", &Headers::new())
            .await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_fallback_response() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(
            404,
            Bytes::from("Not Found"),
        )));

        let response = client.get(URL, &Headers::new()).await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_queued_responses_served_once_in_order() {
        let client = MockHttpClient::new().with_response(URL, Response::json_body("fixed"));
        client.push_response(URL, MockResponse::Success(Response::json_body("first")));
        client.push_response(URL, MockResponse::Success(Response::json_body("second")));

        let mut bodies = Vec::new();
        for _ in 0..3 {
            bodies.push(body(&client, URL).await);
        }

        assert_eq!(bodies, vec!["first", "second", "fixed"]);
        assert_eq!(client.request_count(URL), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_response() {
        let client = MockHttpClient::new();
        client.set_response(
            URL,
            MockResponse::delayed(
                Duration::from_secs(5),
                MockResponse::Success(Response::json_body("{}")),
            ),
        );

        let started = tokio::time::Instant::now();
        assert_eq!(body(&client, URL).await, "{}");
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_clear_and_shared_state() {
        let client = MockHttpClient::new().with_response(URL, Response::json_body("[]"));
        let cloned = client.clone();

        body(&cloned, URL).await;
        assert_eq!(client.request_count(URL), 1);

        client.clear_requests();
        client.clear_responses();
        assert!(cloned.get_requests().is_empty());
        assert!(cloned.get(URL, &Headers::new()).await.is_err());
    }
}
