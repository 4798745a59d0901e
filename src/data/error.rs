use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Failure to load a station file as a whole. Nothing is rendered when
/// one of these occurs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read station file '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to read CSV data")]
    Csv(#[from] csv::Error),

    #[error("Station file contains no data rows")]
    Empty,

    #[error("None of the {skipped} station rows could be parsed")]
    NoValidRows { skipped: usize },
}

/// A single malformed row. Rows with errors are skipped, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {kind}")]
pub struct RowParseError {
    pub line: u64,
    pub kind: RowErrorKind,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowErrorKind {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("field {field} is not valid UTF-8")]
    Encoding { field: usize },

    #[error("network code is empty")]
    EmptyNetwork,

    #[error("column '{column}': '{value}' is not a YYYY-MM-DD date")]
    Date { column: &'static str, value: String },

    #[error("column '{column}': '{value}' is not a number")]
    Number { column: &'static str, value: String },

    #[error("column '{column}': {value} is out of range")]
    OutOfRange { column: &'static str, value: f64 },

    #[error("end date {end} is before start date {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}
