//! Core matrix type
//!
//! A `Matrix` owns a flat `Vec<f64>` in column-major order. The shape is
//! fixed at construction; in-place operations only ever rewrite `data`.

use std::fmt;
use crate::error::{MatError, Result};

/// Dense matrix over a flat column-major buffer
///
/// `data.len() == columns * rows` holds for every instance; constructors
/// fail rather than produce an inconsistent value.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    pub(crate) data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from flat column-major data
    ///
    /// Fails with [`MatError::Shape`] when `columns * rows` differs from
    /// `data.len()`, and with [`MatError::EmptyShape`] when either dimension is zero.
    pub fn new(data: Vec<f64>, columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(MatError::EmptyShape { columns, rows });
        }

        // An overflowing product can never match a real buffer
        let expected = columns.checked_mul(rows).unwrap_or(usize::MAX);
        if expected != data.len() {
            return Err(MatError::Shape { expected, actual: data.len() });
        }

        Ok(Self { columns, rows, data })
    }

    /// Create a matrix with a single row per column block (`rows = 1`)
    pub fn with_columns(data: Vec<f64>, columns: usize) -> Result<Self> {
        Self::new(data, columns, 1)
    }

    /// Build from parts already known to be consistent
    pub(crate) fn from_parts(data: Vec<f64>, columns: usize, rows: usize) -> Self {
        debug_assert_eq!(data.len(), columns * rows);
        Self { columns, rows, data }
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `(columns, rows)`
    pub fn shape(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed matrix
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The backing column-major sequence
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Consume the matrix, returning `(data, (columns, rows))`
    pub fn into_vec(self) -> (Vec<f64>, (usize, usize)) {
        (self.data, (self.columns, self.rows))
    }

    /// True iff both `columns` and `rows` match
    pub fn same_dims(&self, other: &Matrix) -> bool {
        self.columns == other.columns && self.rows == other.rows
    }

    /// Canonical single-line form, `Matrix{(v1,v2,...)columns,rows}`
    ///
    /// Two matrices with equal machine strings are structurally equal.
    pub fn machine_string(&self) -> String {
        format!("Matrix{{({}){},{}}}", join_values(&self.data), self.columns, self.rows)
    }

    /// Human (`machine = false`) or machine (`machine = true`) rendering
    pub fn to_string_mode(&self, machine: bool) -> String {
        if machine {
            self.machine_string()
        } else {
            self.to_string()
        }
    }
}

/// Render one element; infinities spell out `Infinity`
fn format_value(v: f64) -> String {
    if v == f64::INFINITY {
        "Infinity".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        v.to_string()
    }
}

/// Comma-join values with no padding
pub(crate) fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format_value(v))
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} by {} Matrix: ", self.columns, self.rows)?;
        for block in self.data.chunks(self.rows) {
            writeln!(f, "[{}]", join_values(block))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_creation() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();

        assert_eq!(m.columns(), 2);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.len(), 4);
        assert_eq!(m.data(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_default_rows() {
        let m = Matrix::with_columns(vec![1.0, 2.0, 3.0], 3).unwrap();
        assert_eq!(m.shape(), (3, 1));
    }

    #[test]
    fn test_shape_mismatch() {
        for (len, columns, rows) in [(3, 2, 2), (5, 2, 2), (0, 1, 1), (7, 3, 2)] {
            let err = Matrix::new(vec![1.0; len], columns, rows).unwrap_err();
            match err {
                MatError::Shape { expected, actual } => {
                    assert_eq!(expected, columns * rows);
                    assert_eq!(actual, len);
                }
                other => panic!("Expected shape error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_overflowing_dimensions() {
        let err = Matrix::new(vec![1.0], usize::MAX, 2).unwrap_err();
        assert!(matches!(err, MatError::Shape { expected: usize::MAX, actual: 1 }));
        assert_eq!(err.code(), crate::error::codes::SHAPE_ERROR);
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            Matrix::new(vec![], 0, 3),
            Err(MatError::EmptyShape { columns: 0, rows: 3 })
        ));
        assert!(matches!(Matrix::new(vec![], 2, 0), Err(MatError::EmptyShape { .. })));
    }

    #[test]
    fn test_same_dims() {
        let a = Matrix::new(vec![0.0; 6], 3, 2).unwrap();
        let b = Matrix::new(vec![1.0; 6], 3, 2).unwrap();
        let c = Matrix::new(vec![1.0; 6], 2, 3).unwrap();

        assert!(a.same_dims(&b));
        assert!(!a.same_dims(&c));
    }

    #[test]
    fn test_machine_string() {
        let m = Matrix::new(vec![1.0, 2.5, -3.0, 4.0], 2, 2).unwrap();
        assert_eq!(m.machine_string(), "Matrix{(1,2.5,-3,4)2,2}");
        assert_eq!(m.to_string_mode(true), m.machine_string());
    }

    #[test]
    fn test_non_finite_rendering() {
        let m = Matrix::new(vec![f64::INFINITY, f64::NEG_INFINITY, f64::NAN], 3, 1).unwrap();
        assert_eq!(m.machine_string(), "Matrix{(Infinity,-Infinity,NaN)3,1}");
        assert_eq!(m.to_string(), "3 by 1 Matrix: \n[Infinity]\n[-Infinity]\n[NaN]\n");
    }

    #[test]
    fn test_human_string() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
        assert_eq!(m.to_string(), "3 by 2 Matrix: \n[1,2]\n[3,4]\n[5,6]\n");
        assert_eq!(m.to_string_mode(false), m.to_string());
    }

    #[test]
    fn test_into_vec() {
        let m = Matrix::new(vec![1.0, 2.0], 1, 2).unwrap();
        assert_eq!(m.into_vec(), (vec![1.0, 2.0], (1, 2)));
    }
}
