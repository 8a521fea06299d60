//! Network-related error types.
//!
//! Errors raised while fetching a remote document: transport failures and
//! non-2xx responses.

use std::fmt;

use crate::traits::HttpError;

/// Why a remote document could not be fetched.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Host unreachable or refused.
    ConnectionFailed { url: String, message: String },

    Timeout { url: String },

    /// The server answered with a non-2xx status.
    HttpStatus { status: u16, message: String },

    InvalidUrl { url: String },

    /// Body read failures and anything else from the transport.
    Other { message: String },
}

impl NetworkError {
    /// Attach `url` to a transport failure.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                url: url.to_string(),
            },
            HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
                url: url.to_string(),
            },
            HttpError::Body(message) | HttpError::Other(message) => {
                NetworkError::Other { message }
            }
        }
    }

    /// Whether trying again later could plausibly work.
    ///
    /// Nothing retries automatically; this only drives the wording shown to
    /// the user.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Text shown in place of the data.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your internet connection.".to_string()
            }
            NetworkError::Timeout { .. } => {
                "The server took too long to respond. Please try again.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "The requested data was not found on the server.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            NetworkError::InvalidUrl { url } => {
                format!("The data source address '{}' is invalid.", url)
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Stable code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {}: {}", status, message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL '{}'", url),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_connection_failed_keeps_url() {
        let err = NetworkError::from_http(
            HttpError::ConnectionFailed("refused".to_string()),
            "https://example.org/countries-en.json",
        );
        assert_eq!(
            err,
            NetworkError::ConnectionFailed {
                url: "https://example.org/countries-en.json".to_string(),
                message: "refused".to_string(),
            }
        );
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_CONN");
    }

    #[test]
    fn test_from_http_body_failure_is_other() {
        let err = NetworkError::from_http(HttpError::Body("eof".to_string()), "u");
        assert_eq!(
            err,
            NetworkError::Other {
                message: "eof".to_string()
            }
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_client_status_not_retryable() {
        let err = NetworkError::HttpStatus {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(!err.is_retryable());
        assert!(err.user_message().contains("not found"));
    }

    #[test]
    fn test_display() {
        let err = NetworkError::HttpStatus {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(
            NetworkError::Timeout { url: "u".to_string() }.to_string(),
            "Request to 'u' timed out"
        );
    }
}
