//! Row-by-row validation of a JSON batch.

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::{Course, Term, User};
use crate::outbound::TableName;

use super::error::RecordCheckError;

/// A row that failed to decode into its record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Zero-based position of the row in the batch.
    pub index: usize,
    /// Validation or shape error reported for the row.
    pub message: String,
}

/// Outcome of checking one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    table: TableName,
    checked: usize,
    accepted: Vec<usize>,
    rejected: Vec<Rejection>,
}

impl BatchReport {
    /// Table the rows were checked against.
    pub fn table(&self) -> TableName {
        self.table
    }

    /// Number of rows examined; less than the batch size after a fail-fast stop.
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Indices of rows that produced a valid record.
    pub fn accepted(&self) -> &[usize] {
        &self.accepted
    }

    /// Rows that failed validation, in batch order.
    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    /// `true` when no examined row was rejected.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// One-line summary suitable for terminal output.
    pub fn summary(&self) -> String {
        format!(
            "{}: checked {} row(s), accepted {}, rejected {}",
            self.table,
            self.checked,
            self.accepted.len(),
            self.rejected.len()
        )
    }
}

/// Read a JSON array of rows from `path`.
///
/// # Errors
///
/// Returns [`RecordCheckError::Read`] when the file cannot be opened and
/// [`RecordCheckError::Parse`] when its content is not a JSON array.
pub fn load_batch(path: &Path) -> Result<Vec<Value>, RecordCheckError> {
    let read_error = |source| RecordCheckError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "input path must be a file",
        ))
    })?;

    let directory = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = directory.read_to_string(file_name).map_err(read_error)?;

    serde_json::from_str(&contents).map_err(|source| RecordCheckError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode every row through the record type backing `table`.
///
/// `all_courses` and `courses` rows are checked as [`Course`], `terms` rows as
/// [`Term`], and `users` rows as [`User`]. With `fail_fast` the check stops
/// after the first rejection.
pub fn check_batch(table: TableName, rows: Vec<Value>, fail_fast: bool) -> BatchReport {
    let mut report = BatchReport {
        table,
        checked: 0,
        accepted: Vec::new(),
        rejected: Vec::new(),
    };

    for (index, row) in rows.into_iter().enumerate() {
        report.checked += 1;
        match decode_row(table, row) {
            Ok(()) => {
                debug!(%table, index, "row accepted");
                report.accepted.push(index);
            }
            Err(message) => {
                warn!(%table, index, error = %message, "row rejected");
                report.rejected.push(Rejection { index, message });
                if fail_fast {
                    break;
                }
            }
        }
    }

    info!(
        %table,
        checked = report.checked,
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "batch checked"
    );
    report
}

fn decode_row(table: TableName, row: Value) -> Result<(), String> {
    match table {
        TableName::AllCourses | TableName::Courses => decode::<Course>(row),
        TableName::Terms => decode::<Term>(row),
        TableName::Users => decode::<User>(row),
    }
}

fn decode<T: DeserializeOwned>(row: Value) -> Result<(), String> {
    serde_json::from_value::<T>(row)
        .map(drop)
        .map_err(|error| error.to_string())
}
