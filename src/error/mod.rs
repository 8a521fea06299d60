//! Error handling for the client core.
//!
//! | Variant | Cause | Surfaced to user |
//! |---------|-------|------------------|
//! | `Network` | transport failure, non-2xx status | yes, as slice error |
//! | `Parse` | malformed JSON | yes, as slice error |
//! | `NotFound` | country code absent from the dataset | yes, as "No data available" |
//! | `Persistence` | key-value store read/write failure | no, logged only |

mod app_error;
mod category;
mod network;
mod persistence;
mod result;

pub use app_error::{AppError, NO_DATA_MESSAGE};
pub use category::ErrorCategory;
pub use network::NetworkError;
pub use persistence::PersistenceError;
pub use result::{AppResult, LogErr};
