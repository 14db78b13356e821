//! Matrix errors
//!
//! Every failure is raised synchronously at the point of violation and
//! handed back to the caller. Nothing is retried or recovered internally.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const SHAPE_ERROR: &str = "SHAPE_ERROR";
    pub const TYPE_ERROR: &str = "TYPE_ERROR";
    pub const INDEX_ERROR: &str = "INDEX_ERROR";
    pub const DIMENSION_ERROR: &str = "DIMENSION_ERROR";
    pub const INPUT_ERROR: &str = "INPUT_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const JSON_ERROR: &str = "JSON_ERROR";
}

/// Which accessor raised an [`MatError::Index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "rows"),
            Axis::Col => write!(f, "columns"),
        }
    }
}

/// Error type for matrix construction and operations
#[derive(Debug, Error)]
pub enum MatError {
    /// Data length does not match the declared dimensions
    #[error("Data length should be {expected} and instead is {actual}")]
    Shape { expected: usize, actual: usize },

    /// A dimension is zero
    #[error("Matrix dimensions must be at least 1 by 1, got {columns} by {rows}")]
    EmptyShape { columns: usize, rows: usize },

    /// Non-numeric or non-sequence data
    #[error("Type error: {0}")]
    Type(String),

    /// Row or column bounds violated
    #[error("{axis} between {first} and {last} are not all within the {bound} {axis} in the matrix")]
    Index {
        axis: Axis,
        first: usize,
        last: usize,
        bound: usize,
    },

    /// Operands of an elementwise operation differ in shape
    #[error("Matrices must be the same dimensionality, got {left_columns} by {left_rows} and {right_columns} by {right_rows}")]
    Dimension {
        left_columns: usize,
        left_rows: usize,
        right_columns: usize,
        right_rows: usize,
    },

    /// Invalid caller input at a dynamic boundary
    #[error("Input error: {0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MatError {
    pub fn type_error(details: impl Into<String>) -> Self {
        MatError::Type(details.into())
    }

    pub fn input_error(details: impl Into<String>) -> Self {
        MatError::Input(details.into())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            MatError::Shape { .. } | MatError::EmptyShape { .. } => codes::SHAPE_ERROR,
            MatError::Type(_) => codes::TYPE_ERROR,
            MatError::Index { .. } => codes::INDEX_ERROR,
            MatError::Dimension { .. } => codes::DIMENSION_ERROR,
            MatError::Input(_) => codes::INPUT_ERROR,
            MatError::Io(_) => codes::IO_ERROR,
            MatError::Json(_) => codes::JSON_ERROR,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MatError>;
