//! Dataset loading error types.

use std::path::PathBuf;

/// Errors that can occur while obtaining a network dataset.
///
/// These never come out of graph building or path search; they only concern
/// getting the raw data in the first place.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Snapshot file could not be read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot contents are not a valid dataset
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The data source could not provide a dataset
    #[error("data source unavailable: {message}")]
    Unavailable { message: String },
}
