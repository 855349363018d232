//! Output trait and error types

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A record type that can be written as one row of a delimited table
///
/// Columns are declared explicitly and in order: the writer derives the header
/// row from `FIELDS` and never inspects a record beyond [`to_row`], so the
/// declared names and the row layout must match.
///
/// [`to_row`]: TableRecord::to_row
pub trait TableRecord {
    /// Column names, in output order
    const FIELDS: &'static [&'static str];

    /// Stringifies the record into one cell per field, in `FIELDS` order
    fn to_row(&self) -> Vec<String>;
}
