//! Named matrix constructors

use crate::error::{MatError, Result};
use crate::types::Matrix;

impl Matrix {
    /// Make a matrix with every cell set to `value`
    pub fn filled(columns: usize, rows: usize, value: f64) -> Result<Self> {
        let len = columns
            .checked_mul(rows)
            .ok_or(MatError::Shape { expected: usize::MAX, actual: 0 })?;
        Self::new(vec![value; len], columns, rows)
    }

    /// Make a matrix of ones
    pub fn ones(columns: usize, rows: usize) -> Result<Self> {
        Self::filled(columns, rows, 1.0)
    }

    /// Make a matrix of zeroes
    pub fn zeroes(columns: usize, rows: usize) -> Result<Self> {
        Self::filled(columns, rows, 0.0)
    }

    /// Make an `n` by `n` identity matrix
    pub fn eye(n: usize) -> Result<Self> {
        let mut m = Self::zeroes(n, n)?;
        m.data.iter_mut().step_by(n + 1).for_each(|x| *x = 1.0);
        Ok(m)
    }
}
