//! errors raised by point set construction and processing

use thiserror::Error;

/// Error type of all core operations on points and point sets.
///
/// Every error carries enough context (row, column, attribute, statistic) to locate
/// the faulty data, as malformed input is by far the most frequent cause.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    /// empty data, ragged rows, dimension mismatch
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// a cell could not be decoded as a number
    #[error("cannot parse cell {cell:?} at row {row}, column {column} : {msg}")]
    ParseError {
        row: usize,
        column: usize,
        cell: String,
        msg: String,
    },
    #[error("index {index} out of range for {what} of length {len}")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
    /// a normalization statistic is zero
    #[error("division by zero : {statistic} is zero for {location}")]
    DivideByZero {
        statistic: &'static str,
        location: String,
    },
    #[error("empty dataset")]
    EmptyDataset,
}

/// Convenient alias for results of core operations.
pub type Result<T> = std::result::Result<T, DataError>;

impl DataError {
    pub(crate) fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        DataError::IndexOutOfRange { what, index, len }
    }

    pub(crate) fn zero_attribute(statistic: &'static str, attribute: usize) -> Self {
        DataError::DivideByZero {
            statistic,
            location: format!("attribute {}", attribute),
        }
    }
}

//========================================================

// end of mod tests
