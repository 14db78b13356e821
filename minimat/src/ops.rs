//! In-place elementwise operations
//!
//! All operations here mutate `self` and return it for chaining. They loop
//! element by element, so a caller-supplied closure that panics part way
//! through leaves the earlier elements already rewritten.

use crate::error::{MatError, Result};
use crate::types::Matrix;

impl Matrix {
    /// Combine with `other` element by element, in place
    ///
    /// `self[i] = op(self[i], other[i])` for every flat index. Fails with
    /// [`MatError::Dimension`] unless both shapes match; `other` is never modified.
    pub fn elementwise<F>(&mut self, other: &Matrix, mut op: F) -> Result<&mut Self>
    where
        F: FnMut(f64, f64) -> f64,
    {
        if !self.same_dims(other) {
            return Err(MatError::Dimension {
                left_columns: self.columns,
                left_rows: self.rows,
                right_columns: other.columns,
                right_rows: other.rows,
            });
        }

        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = op(*a, b);
        }
        Ok(self)
    }

    /// Elementwise sum, in place
    pub fn add(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.elementwise(other, |a, b| a + b)
    }

    /// Schur (elementwise) product, in place
    pub fn schur(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.elementwise(other, |a, b| a * b)
    }

    /// Alias of [`Matrix::schur`]
    pub fn emult(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.schur(other)
    }

    /// Alias of [`Matrix::schur`]
    pub fn hadamard(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.schur(other)
    }

    /// Replace every element `x` with `f(x)`, in place
    pub fn apply<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(f64) -> f64,
    {
        for x in self.data.iter_mut() {
            *x = f(*x);
        }
        self
    }

    /// Elementwise reciprocal, in place
    ///
    /// Zero elements become infinite; nothing is trapped.
    pub fn elem_inv(&mut self) -> &mut Self {
        self.apply(|x| 1.0 / x)
    }
}
