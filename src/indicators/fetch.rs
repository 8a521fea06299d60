//! Concurrent fetch of the two indicator documents.

use tracing::info;

use super::merge::merge_for_code;
use crate::api::WhoApiClient;
use crate::error::AppResult;
use crate::models::EnrichedCountry;

/// Fetch the indicator dataset and domain definitions, then merge for `code`.
///
/// Both requests run concurrently; the first failure aborts the join and is
/// returned without merging.
pub async fn load_country_profile(api: &WhoApiClient, code: &str) -> AppResult<EnrichedCountry> {
    let (records, definitions) = futures::try_join!(
        api.fetch_indicator_records(),
        api.fetch_domain_definitions()
    )?;

    info!(
        code,
        records = records.len(),
        domains = definitions.len(),
        "Merging indicator documents"
    );
    merge_for_code(code, &records, &definitions, api.config().base_year)
}
