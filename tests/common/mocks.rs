//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `who_drowning::adapters::mock` and adds a few
//! response helpers.

pub use who_drowning::adapters::mock::{InMemoryStore, MockHttpClient, MockResponse};
pub use who_drowning::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;
use std::time::Duration;

/// Successful JSON response.
pub fn ok(body: impl Into<String>) -> MockResponse {
    MockResponse::Success(Response::json_body(body))
}

/// Successful JSON response served after `millis`.
pub fn slow(millis: u64, body: impl Into<String>) -> MockResponse {
    MockResponse::delayed(Duration::from_millis(millis), ok(body))
}

/// Response with a non-2xx status and a plain body.
pub fn status(code: u16, body: &str) -> MockResponse {
    MockResponse::Success(Response::new(code, Bytes::from(body.to_string())))
}

/// Transport-level failure.
pub fn connection_refused() -> MockResponse {
    MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string()))
}
