//! Matrix norms and vector normalization

use std::str::FromStr;

use crate::error::MatError;
use crate::helpers::parse_int_prefix;
use crate::types::Matrix;

/// Norm level accepted by [`Matrix::norm`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormLevel {
    /// General p-norm, `(sum x^p)^(1/p)`
    P(f64),
    /// Frobenius norm
    Fro,
    /// Infinity norm, the largest element
    Inf,
}

impl Default for NormLevel {
    fn default() -> Self {
        NormLevel::P(2.0)
    }
}

impl From<f64> for NormLevel {
    /// `+inf` selects [`NormLevel::Inf`]; finite levels are truncated toward zero.
    fn from(level: f64) -> Self {
        if level == f64::INFINITY {
            NormLevel::Inf
        } else if level.is_finite() {
            NormLevel::P(level.trunc())
        } else {
            NormLevel::P(f64::NAN)
        }
    }
}

impl From<i32> for NormLevel {
    fn from(level: i32) -> Self {
        NormLevel::P(f64::from(level))
    }
}

impl FromStr for NormLevel {
    type Err = MatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "inf" => Ok(NormLevel::Inf),
            "fro" => Ok(NormLevel::Fro),
            other => parse_int_prefix(other)
                .map(|p| NormLevel::P(p as f64))
                .ok_or_else(|| MatError::input_error(format!(
                    "norm level must be a number, 'fro' or 'inf', got '{}'", s
                ))),
        }
    }
}

impl Matrix {
    /// Norm over every element of the backing buffer
    ///
    /// - [`NormLevel::Inf`]: the largest element (signed, NaN propagates)
    /// - [`NormLevel::Fro`]: `sqrt(sum |x|^2)`
    /// - [`NormLevel::P`]: `(sum x^p)^(1/p)`, with no absolute value taken
    pub fn norm(&self, level: impl Into<NormLevel>) -> f64 {
        match level.into() {
            NormLevel::Inf => self.data.iter().copied().fold(f64::NEG_INFINITY, |acc, x| {
                if acc.is_nan() || x.is_nan() {
                    f64::NAN
                } else {
                    acc.max(x)
                }
            }),
            NormLevel::Fro => self.data.iter().map(|x| (x * x).abs()).sum::<f64>().sqrt(),
            NormLevel::P(p) => self
                .data
                .iter()
                .map(|x| x.powf(p))
                .sum::<f64>()
                .powf(1.0 / p),
        }
    }

    /// Divide each row (`by_rows`) or column vector by its own sum, in place
    ///
    /// Vectors are read with the row/column accessors and written back with
    /// [`Matrix::row_set`] or [`Matrix::col_set`]. A zero-sum vector yields
    /// infinite or NaN entries.
    pub fn normalize(&mut self, by_rows: bool) -> &mut Self {
        if by_rows {
            for x in 0..self.columns {
                let scaled = divide_by_sum(self.row_block(x, x).data);
                self.row_set(x, &scaled);
            }
        } else {
            for x in 0..self.rows {
                let scaled = divide_by_sum(self.col_block(x, x).data);
                self.col_set(x, &scaled);
            }
        }
        self
    }
}

fn divide_by_sum(mut values: Vec<f64>) -> Vec<f64> {
    let sum: f64 = values.iter().sum();
    values.iter_mut().for_each(|x| *x /= sum);
    values
}
