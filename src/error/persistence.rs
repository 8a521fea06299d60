//! Errors raised by the local key-value store.

use thiserror::Error;

/// Failure reading or writing the local key-value store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersistenceError {
    /// Reading a key failed
    #[error("Failed to read '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// Writing a key failed
    #[error("Failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// Stored data could not be (de)serialized
    #[error("Stored data for '{key}' is invalid: {message}")]
    Serialization { key: String, message: String },

    /// No location to store data in
    #[error("No data directory available")]
    NoDataDirectory,
}

impl PersistenceError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PersistenceError::ReadFailed { .. } => "E_STORE_READ",
            PersistenceError::WriteFailed { .. } => "E_STORE_WRITE",
            PersistenceError::Serialization { .. } => "E_STORE_SERDE",
            PersistenceError::NoDataDirectory => "E_STORE_DIR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_key() {
        let err = PersistenceError::WriteFailed {
            key: "favourites".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to write 'favourites': disk full");
        assert_eq!(err.error_code(), "E_STORE_WRITE");
    }

    #[test]
    fn test_no_data_directory() {
        assert_eq!(
            PersistenceError::NoDataDirectory.to_string(),
            "No data directory available"
        );
    }
}
