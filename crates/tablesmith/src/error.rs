//! Error types for table layout, rendering and export.
//!
//! Every variant is a programmer or input error. Nothing here is transient,
//! so callers are expected to fix the data rather than retry.

use thiserror::Error;

/// Error type for all fallible table operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// A row places more cells (spans included) than the table declares columns.
    #[error("row {row} exceeds defined column count ({columns})")]
    ColumnOverflow { row: usize, columns: usize },

    /// A cell's span footprint overlaps a position that is already occupied.
    #[error("cell span conflict at row {row}, col {col}")]
    SpanConflict { row: usize, col: usize },

    /// Export was requested in a format that is not supported.
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    /// A configuration referenced a built-in theme that does not exist.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Serialized row data was neither an array nor an object.
    #[error("invalid row data: {0}")]
    InvalidRow(String),

    /// CSV delimiter or quote character must be a single ASCII byte.
    #[error("invalid csv delimiter or quote character: {0:?}")]
    InvalidDelimiter(char),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl TableError {
    /// True for the layout conflicts raised by the grid engine.
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            TableError::ColumnOverflow { .. } | TableError::SpanConflict { .. }
        )
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for TableError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        TableError::Io(err.into_error())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TableError::ColumnOverflow { row: 2, columns: 3 };
        assert_eq!(err.to_string(), "row 2 exceeds defined column count (3)");

        let err = TableError::UnknownFormat("xml".to_string());
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_layout_classification() {
        assert!(TableError::SpanConflict { row: 0, col: 1 }.is_layout());
        assert!(!TableError::UnknownTheme("neon".into()).is_layout());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TableError = io_err.into();
        assert!(matches!(err, TableError::Io(_)));
    }
}
