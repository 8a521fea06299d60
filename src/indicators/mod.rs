//! Indicator merge pipeline.
//!
//! [`load_country_profile`] fetches the per-country indicator dataset and the
//! domain definitions concurrently, then [`merge_for_code`] joins them into
//! an [`EnrichedCountry`](crate::models::EnrichedCountry).

mod fetch;
mod merge;

pub use fetch::load_country_profile;
pub use merge::{merge, merge_for_code};
