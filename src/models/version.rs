use serde::Deserialize;

/// Response from the version endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VersionInfo {
    /// Latest published app version
    pub version: String,
}
