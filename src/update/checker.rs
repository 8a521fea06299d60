//! Version gate.
//!
//! Compares the running version with the published one. Any difference, in
//! either direction, means an update is needed; there is no semantic version
//! ordering.

use serde::Serialize;
use tracing::info;

use crate::api::WhoApiClient;
use crate::error::AppResult;

/// Outcome of comparing the local version with the remote one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    pub current_version: String,
    pub remote_version: String,
    pub needs_update: bool,
}

/// Compare two version strings exactly.
///
/// # Example
///
/// ```
/// use who_drowning::update::check_versions;
///
/// assert!(!check_versions("1.2.0", "1.2.0").needs_update);
/// assert!(check_versions("1.2.0", "1.1.9").needs_update);
/// ```
pub fn check_versions(current: &str, remote: &str) -> VersionCheck {
    VersionCheck {
        current_version: current.to_string(),
        remote_version: remote.to_string(),
        needs_update: remote != current,
    }
}

/// Fetch the remote version and compare it with the configured one.
pub async fn check_for_update(api: &WhoApiClient) -> AppResult<VersionCheck> {
    let info = api.fetch_version().await?;
    let check = check_versions(&api.config().current_version, &info.version);
    info!(
        current = %check.current_version,
        remote = %check.remote_version,
        needs_update = check.needs_update,
        "Version check complete"
    );
    Ok(check)
}
