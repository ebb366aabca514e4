//! Errors raised while loading a record batch.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a batch from being checked at all.
///
/// Individual invalid rows are not errors; they are reported through
/// [`crate::record_check::BatchReport`].
#[derive(Debug, Error)]
pub enum RecordCheckError {
    /// Settings could not be loaded from the environment.
    #[error("failed to load record-check settings: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },
    /// The input file could not be opened or read.
    #[error("failed to read records at {path}: {source}")]
    Read {
        /// Path to the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The input file is not a JSON array.
    #[error("records at {path} are not a JSON array: {source}")]
    Parse {
        /// Path to the input file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
