//! Error types for table construction.

use std::fmt;

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Identifies the input line an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    /// The label (header) line.
    Labels,
    /// A data row, by zero-based index.
    Row(usize),
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRef::Labels => f.write_str("labels"),
            LineRef::Row(index) => write!(f, "row {index}"),
        }
    }
}

/// Errors that can occur while building a table.
///
/// All of them are raised before any line is assembled, so a failed call
/// never yields partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// No rows were supplied, so there is nothing to size the columns by.
    #[error("Table has no rows")]
    EmptyInput,

    /// A row or the labels disagree with the column count of the first row.
    #[error("{line} has {found} cells, expected {expected}")]
    ShapeMismatch {
        line: LineRef,
        expected: usize,
        found: usize,
    },

    /// A cell has no single-line text form.
    #[error("Cell at {line}, column {column} cannot be shown: {reason}")]
    UnrepresentableValue {
        line: LineRef,
        column: usize,
        reason: String,
    },
}

impl TableError {
    /// Create an unrepresentable-value error for the given cell.
    pub fn unrepresentable(line: LineRef, column: usize, reason: impl Into<String>) -> Self {
        Self::UnrepresentableValue {
            line,
            column,
            reason: reason.into(),
        }
    }
}
