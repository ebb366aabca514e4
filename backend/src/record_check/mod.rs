//! Batch validation of table rows exported as JSON.
//!
//! The `record-check` binary wires these pieces together: settings come from
//! the environment, rows are read from a JSON array on disk, and every row is
//! decoded through the record type that backs its table.

mod batch;
mod config;
mod error;

pub use batch::{BatchReport, Rejection, check_batch, load_batch};
pub use config::RecordCheckSettings;
pub use error::RecordCheckError;
