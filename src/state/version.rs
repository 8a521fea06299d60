use serde::Serialize;

use super::lifecycle::{Lifecycle, RequestTracker};
use crate::update::VersionCheck;

/// Version gate slice.
///
/// `needs_update` only ever becomes true after a successful check.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VersionState {
    pub current_version: String,
    pub remote_version: Option<String>,
    pub needs_update: bool,
    pub lifecycle: Lifecycle,
    #[serde(skip)]
    pub(crate) requests: RequestTracker,
}

impl VersionState {
    pub fn new(current_version: impl Into<String>) -> Self {
        Self {
            current_version: current_version.into(),
            ..Self::default()
        }
    }

    pub fn loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.lifecycle.error()
    }

    pub(crate) fn begin_request(&mut self) -> u64 {
        self.lifecycle = Lifecycle::InFlight;
        self.requests.begin()
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.requests.is_current(generation)
    }

    pub(crate) fn resolve(&mut self, check: VersionCheck) {
        self.current_version = check.current_version;
        self.remote_version = Some(check.remote_version);
        self.needs_update = check.needs_update;
        self.lifecycle = Lifecycle::Resolved;
    }

    /// Record a failed check. The gate stays open.
    pub(crate) fn fail(&mut self, message: String) {
        self.needs_update = false;
        self.lifecycle = Lifecycle::Failed { message };
    }
}
