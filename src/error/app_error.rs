//! Unified error type for fetch workflows and persistence.

use std::fmt;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::persistence::PersistenceError;

/// Message shown when a requested country has no data.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// Unified error type.
///
/// Workflows convert this into the slice-level error string via
/// [`AppError::user_message`].
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Transport failure or non-2xx status.
    Network(NetworkError),

    /// The response body was not the JSON shape we expected.
    Parse { source_name: String, message: String },

    /// The requested country code is absent from the indicator dataset.
    NotFound { code: String },

    /// Local key-value store failure.
    Persistence(PersistenceError),
}

impl AppError {
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        AppError::NotFound { code: code.into() }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Network(_) => ErrorCategory::Network,
            AppError::Parse { .. } => ErrorCategory::Data,
            AppError::NotFound { .. } => ErrorCategory::NotFound,
            AppError::Persistence(_) => ErrorCategory::Storage,
        }
    }

    /// Check if re-triggering the workflow could help.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Network(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Get the message shown in place of content.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(err) => err.user_message(),
            AppError::Parse { .. } => {
                "Received an invalid response from the server. Please try again.".to_string()
            }
            AppError::NotFound { .. } => NO_DATA_MESSAGE.to_string(),
            AppError::Persistence(err) => err.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Network(err) => err.error_code(),
            AppError::Parse { .. } => "E_PARSE",
            AppError::NotFound { .. } => "E_NOT_FOUND",
            AppError::Persistence(err) => err.error_code(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(err) => write!(f, "{}", err),
            AppError::Parse {
                source_name,
                message,
            } => write!(f, "Malformed {} response: {}", source_name, message),
            AppError::NotFound { code } => write!(f, "No data found for country: {}", code),
            AppError::Persistence(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(err) => Some(err),
            AppError::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(err: NetworkError) -> Self {
        AppError::Network(err)
    }
}

impl From<PersistenceError> for AppError {
    fn from(err: PersistenceError) -> Self {
        AppError::Persistence(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_shows_generic_message() {
        let err = AppError::not_found("XYZ");
        assert_eq!(err.user_message(), NO_DATA_MESSAGE);
        assert_eq!(err.to_string(), "No data found for country: XYZ");
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.error_code(), "E_NOT_FOUND");
    }

    #[test]
    fn test_network_error_converts() {
        let err: AppError = NetworkError::HttpStatus {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_HTTP");
    }

    #[test]
    fn test_parse_error_not_retryable() {
        let err = AppError::parse("countries", "expected array");
        assert!(!err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(
            err.to_string(),
            "Malformed countries response: expected array"
        );
    }

    #[test]
    fn test_persistence_error_converts() {
        let err: AppError = PersistenceError::NoDataDirectory.into();
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert!(!err.category().is_user_visible());
    }
}
