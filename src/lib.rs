//! WHO drowning statistics client core.
//!
//! Fetches the countries list, per-country indicators and domain
//! definitions from the remote JSON API, merges them into profile view
//! models, and keeps favourites in a local key-value store. Presentation
//! layers drive it through [`app::AppHandle`] triggers and observe
//! [`state::AppState`] snapshots.

pub mod adapters;
pub mod api;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod favourites;
pub mod flag;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod state;
pub mod traits;
pub mod update;
