use std::path::PathBuf;

use thiserror::Error;

/// A payload could not be turned into a complete, valid dataset.
/// Raised before any derived state is built.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed {what}: {reason}")]
    Malformed { what: &'static str, reason: String },
}

impl LoadError {
    pub(crate) fn malformed(what: &'static str, reason: impl Into<String>) -> Self {
        LoadError::Malformed { what, reason: reason.into() }
    }
}
