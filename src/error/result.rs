//! Result type alias for fallible operations.

use super::app_error::AppError;

/// Type alias for Results using [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for logging an error and discarding it.
///
/// Used where failures must not reach the user: favourites persistence and
/// the version check.
pub trait LogErr<T> {
    /// Log the error at `warn` level with `operation` and return `None`.
    fn log_err(self, operation: &str) -> Option<T>;
}

impl<T> LogErr<T> for AppResult<T> {
    fn log_err(self, operation: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    category = %err.category(),
                    "{} failed: {}",
                    operation,
                    err
                );
                None
            }
        }
    }
}
