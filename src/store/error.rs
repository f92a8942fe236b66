use std::path::PathBuf;

use thiserror::Error;

use crate::core::GameId;

/// Failures surfaced by the snapshot store.
///
/// The rules never see these: they are raised and handled on the
/// persistence side only.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game {0} not found")]
    NotFound(GameId),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot data under key {key}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid store configuration: {message}")]
    InvalidConfig { message: String },
}

impl StoreError {
    /// Check whether this is a missing-game error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
