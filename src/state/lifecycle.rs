use serde::Serialize;

/// Status of one asynchronous workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lifecycle {
    #[default]
    Idle,
    InFlight,
    Resolved,
    Failed {
        message: String,
    },
}

impl Lifecycle {
    pub fn is_loading(&self) -> bool {
        matches!(self, Lifecycle::InFlight)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Lifecycle::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Take-latest bookkeeping for one workflow.
///
/// Every request gets a fresh generation; only a result carrying the most
/// recent generation may be applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    /// Start a new request and return its generation.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest && generation != 0
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}
