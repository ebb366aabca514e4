//! Error types for the transcript crate.

use thiserror::Error;

/// Errors raised when parsing transcript values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    /// The text names no letter grade.
    #[error("unknown letter grade: {value}")]
    UnknownLetterGrade {
        /// The rejected text.
        value: String,
    },
}
