//! Version gate: does the published app version differ from ours?

mod checker;

pub use checker::{check_for_update, check_versions, VersionCheck};
