use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while listing or reading measurement files.
///
/// Every variant is fatal for the run: one bad file aborts the whole
/// computation and no partial report is produced.
#[derive(Error, Debug)]
pub enum JcError {
    /// The measurement directory could not be listed.
    #[error("Failed to list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed (I/O, malformed record, bad UTF-8).
    #[error("Failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required header is absent.
    #[error("{path}: missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A data row has more fields than the header.
    #[error("{path}: row {row} has {found} fields, header has {expected}")]
    TooManyFields {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell in a required column is not a number.
    #[error("{path}: row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, JcError>;
