//! Mock implementations for testing.
//!
//! This module provides mock implementations of the collaborator traits,
//! enabling tests without network access or file system access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable, optionally delayed responses
//! - [`InMemoryStore`] - Key-value store with failure injection and write history

pub mod http;
pub mod storage;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use storage::InMemoryStore;
