//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, timeout or non-2xx status.
    Network,

    /// The server answered with something that is not the expected JSON.
    Data,

    /// The requested record does not exist.
    NotFound,

    /// Local storage failures. Logged, never shown.
    Storage,
}

impl ErrorCategory {
    /// Returns true if errors in this category are shown to the user.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, ErrorCategory::Storage)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Data => "data",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Storage => "storage",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
