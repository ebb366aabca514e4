//! Validated course, term, and user records for the AUB GPA backend.
//!
//! - [`domain`]: records and the UUID / institutional email validators.
//! - [`outbound`]: the table names the hosted database is keyed by.
//! - [`record_check`]: batch validation behind the `record-check` binary.

pub mod domain;
pub mod outbound;
pub mod record_check;
