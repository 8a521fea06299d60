//! Trait abstractions for the external collaborators.
//!
//! # Traits
//!
//! - [`HttpClient`] - fetch remote JSON documents
//! - [`KeyValueStore`] - read/write the local favourites snapshot

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::KeyValueStore;
