//! Error types for gridmap.

use thiserror::Error;

use crate::column::ColumnType;

/// Errors that can occur while mapping or updating a sheet.
///
/// All variants except [`SheetError::Remote`] are local contract failures:
/// they are surfaced immediately and never caught or retried internally.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Missing header row")]
    MissingHeaderRow,

    #[error("Unexpected header: {0:?}")]
    UnexpectedHeader(String),

    #[error("Unknown column: {0:?}")]
    UnknownColumn(String),

    #[error("Unknown header: {0:?}")]
    UnknownHeader(String),

    #[error("Unknown column type: {0:?}")]
    InvalidColumnType(String),

    #[error("Column index {0} is beyond single-letter addressing")]
    ColumnRangeExceeded(usize),

    #[error("Transform changed the row's key set; only field values may be mutated")]
    KeySetMismatch,

    #[error("Can only update string columns; {column:?} is {column_type}")]
    NonStringColumnUpdate {
        column: String,
        column_type: ColumnType,
    },

    #[error("Remote call failed: {0}")]
    Remote(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SheetError {
    /// Wrap a transport-layer failure without re-categorizing it.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        SheetError::Remote(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
