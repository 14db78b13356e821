//! Row and column access over the flat column-major buffer
//!
//! Rows are contiguous blocks of `rows` elements, so row access is a single
//! slice. Columns are gathered one element range per block.
//!
//! Bounds follow the stored fields: row indices are checked against
//! `columns` and column indices against `rows`.

use std::iter::FusedIterator;

use crate::error::{Axis, MatError, Result};
use crate::types::Matrix;

// ============================================================================
// Rows
// ============================================================================

impl Matrix {
    /// Get a single row
    pub fn row(&self, index: usize) -> Result<Matrix> {
        self.row_range(index, index)
    }

    /// Get rows `min(index, to_index)..=max(index, to_index)`
    ///
    /// Both bounds must be strictly less than `columns`. The result keeps
    /// `rows` and has `|to_index - index| + 1` columns.
    pub fn row_range(&self, index: usize, to_index: usize) -> Result<Matrix> {
        if index >= self.columns || to_index >= self.columns {
            return Err(MatError::Index {
                axis: Axis::Row,
                first: index,
                last: to_index,
                bound: self.columns,
            });
        }
        Ok(self.row_block(index.min(to_index), index.max(to_index)))
    }

    /// Overwrite a single row in place
    pub fn row_set(&mut self, index: usize, values: &[f64]) -> &mut Self {
        self.row_set_range(index, index, values)
    }

    /// Overwrite rows `min(index, to_index)..=max(index, to_index)` in place
    ///
    /// Values are written positionally from the start of the first row.
    /// Nothing is validated: a short `values` leaves the trailing slots
    /// untouched, and positions past the end of the buffer are skipped.
    pub fn row_set_range(&mut self, index: usize, to_index: usize, values: &[f64]) -> &mut Self {
        let (lo, hi) = (index.min(to_index), index.max(to_index));
        let first = lo.saturating_mul(self.rows);
        let span = (hi - lo).saturating_add(1).saturating_mul(self.rows);

        for (offset, &value) in values.iter().take(span).enumerate() {
            if let Some(slot) = first.checked_add(offset).and_then(|pos| self.data.get_mut(pos)) {
                *slot = value;
            }
        }
        self
    }

    /// Iterate over every row as a `Matrix`
    pub fn rows_iter(&self) -> Rows<'_> {
        Rows { matrix: self, front: 0, back: self.columns }
    }

    pub(crate) fn row_block(&self, lo: usize, hi: usize) -> Matrix {
        let data = self.data[lo * self.rows..(hi + 1) * self.rows].to_vec();
        Matrix::from_parts(data, hi - lo + 1, self.rows)
    }
}

// ============================================================================
// Columns
// ============================================================================

impl Matrix {
    /// Get a single column
    pub fn col(&self, index: usize) -> Result<Matrix> {
        self.col_range(index, index)
    }

    /// Get columns `min(index, to_index)..=max(index, to_index)`
    ///
    /// The upper bound must be strictly less than `rows`. The result keeps
    /// `columns` and has `|to_index - index| + 1` rows.
    pub fn col_range(&self, index: usize, to_index: usize) -> Result<Matrix> {
        let (lo, hi) = (index.min(to_index), index.max(to_index));
        if hi >= self.rows {
            return Err(MatError::Index {
                axis: Axis::Col,
                first: lo,
                last: hi,
                bound: self.rows,
            });
        }
        Ok(self.col_block(lo, hi))
    }

    /// Overwrite a single column in place
    pub fn col_set(&mut self, index: usize, values: &[f64]) -> &mut Self {
        self.col_set_range(index, index, values)
    }

    /// Overwrite columns `min(index, to_index)..=max(index, to_index)` in place
    ///
    /// For offset `x` and row `y`, `values[x * rows + y]` lands at flat
    /// position `index + x + rows * y`. Same no-validation policy as
    /// [`Matrix::row_set_range`].
    pub fn col_set_range(&mut self, index: usize, to_index: usize, values: &[f64]) -> &mut Self {
        let (lo, hi) = (index.min(to_index), index.max(to_index));
        let rows = self.rows;
        let span = (hi - lo).saturating_add(1).saturating_mul(rows);

        for (new_pos, &value) in values.iter().take(span).enumerate() {
            let (x, y) = (new_pos / rows, new_pos % rows);
            let old_pos = lo
                .checked_add(x)
                .and_then(|p| p.checked_add(rows * y));
            if let Some(slot) = old_pos.and_then(|pos| self.data.get_mut(pos)) {
                *slot = value;
            }
        }
        self
    }

    /// Iterate over every column as a `Matrix`
    pub fn cols_iter(&self) -> Cols<'_> {
        Cols { matrix: self, front: 0, back: self.rows }
    }

    pub(crate) fn col_block(&self, lo: usize, hi: usize) -> Matrix {
        let data: Vec<f64> = self
            .data
            .chunks(self.rows)
            .flat_map(|block| block[lo..=hi].iter().copied())
            .collect();
        Matrix::from_parts(data, self.columns, hi - lo + 1)
    }
}

// ============================================================================
// Diagonal and trace
// ============================================================================

impl Matrix {
    /// Diagonal as a `1` by `min(columns, rows)` vector
    ///
    /// Element `i` is read from flat position `columns * i + i`.
    pub fn diag(&self) -> Matrix {
        let n = self.columns.min(self.rows);
        let data: Vec<f64> = (0..n).map(|i| self.data[self.columns * i + i]).collect();
        Matrix::from_parts(data, 1, n)
    }

    /// Sum of every element in the backing buffer
    pub fn trace(&self) -> f64 {
        self.data.iter().sum()
    }
}

// ============================================================================
// Iterators
// ============================================================================

/// Lazy iterator over rows, yielding one `Matrix` per row index
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    matrix: &'a Matrix,
    front: usize,
    back: usize,
}

impl Iterator for Rows<'_> {
    type Item = Matrix;

    fn next(&mut self) -> Option<Matrix> {
        if self.front >= self.back {
            return None;
        }
        let row = self.matrix.row_block(self.front, self.front);
        self.front += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Rows<'_> {
    fn next_back(&mut self) -> Option<Matrix> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.matrix.row_block(self.back, self.back))
    }
}

impl ExactSizeIterator for Rows<'_> {}
impl FusedIterator for Rows<'_> {}

/// Lazy iterator over columns, yielding one `Matrix` per column index
#[derive(Debug, Clone)]
pub struct Cols<'a> {
    matrix: &'a Matrix,
    front: usize,
    back: usize,
}

impl Iterator for Cols<'_> {
    type Item = Matrix;

    fn next(&mut self) -> Option<Matrix> {
        if self.front >= self.back {
            return None;
        }
        let col = self.matrix.col_block(self.front, self.front);
        self.front += 1;
        Some(col)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Cols<'_> {
    fn next_back(&mut self) -> Option<Matrix> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.matrix.col_block(self.back, self.back))
    }
}

impl ExactSizeIterator for Cols<'_> {}
impl FusedIterator for Cols<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(columns: usize, rows: usize) -> Matrix {
        let data = (0..columns * rows).map(|i| i as f64).collect();
        Matrix::new(data, columns, rows).unwrap()
    }

    #[test]
    fn test_get_row() {
        let row = Matrix::ones(3, 4).unwrap().row(0).unwrap();
        let expected = Matrix::new(vec![1.0, 1.0, 1.0, 1.0], 1, 4).unwrap();

        assert_eq!(row.machine_string(), expected.machine_string());
        assert_eq!(row.to_string(), expected.to_string());
    }

    #[test]
    fn test_get_two_rows() {
        let rows = Matrix::filled(3, 2, 4.0).unwrap().row_range(0, 1).unwrap();
        let expected = Matrix::new(vec![4.0; 4], 2, 2).unwrap();
        assert_eq!(rows.machine_string(), expected.machine_string());
    }

    #[test]
    fn test_row_range_reversed() {
        let m = counting(3, 2);
        let forward = m.row_range(1, 2).unwrap();
        let reversed = m.row_range(2, 1).unwrap();

        assert_eq!(forward.data(), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_row_bounds() {
        let m = counting(3, 2);
        assert!(m.row(2).is_ok());
        assert!(matches!(m.row(3), Err(MatError::Index { axis: Axis::Row, bound: 3, .. })));
        assert!(matches!(m.row_range(0, 3), Err(MatError::Index { .. })));
        assert!(matches!(m.row_range(5, 0), Err(MatError::Index { .. })));
    }

    #[test]
    fn test_get_col() {
        let col = Matrix::ones(3, 4).unwrap().col(0).unwrap();
        let expected = Matrix::new(vec![1.0; 3], 3, 1).unwrap();
        assert_eq!(col.machine_string(), expected.machine_string());
    }

    #[test]
    fn test_get_two_cols() {
        let cols = Matrix::filled(3, 2, 4.0).unwrap().col_range(0, 1).unwrap();
        let expected = Matrix::new(vec![4.0; 6], 3, 2).unwrap();
        assert_eq!(cols.machine_string(), expected.machine_string());
    }

    #[test]
    fn test_col_gathers_across_blocks() {
        let m = counting(3, 4);
        assert_eq!(m.col(1).unwrap().data(), &[1.0, 5.0, 9.0]);
        assert_eq!(m.col_range(3, 2).unwrap().data(), &[2.0, 3.0, 6.0, 7.0, 10.0, 11.0]);
        assert_eq!(m.col_range(2, 3).unwrap().shape(), (3, 2));
    }

    #[test]
    fn test_col_bounds() {
        let m = counting(3, 2);
        assert!(m.col(1).is_ok());
        assert!(matches!(m.col(2), Err(MatError::Index { axis: Axis::Col, bound: 2, .. })));
        assert!(matches!(m.col_range(0, 4), Err(MatError::Index { .. })));
    }

    #[test]
    fn test_row_set() {
        let mut m = counting(3, 2);
        m.row_set(1, &[10.0, 11.0]);
        assert_eq!(m.data(), &[0.0, 1.0, 10.0, 11.0, 4.0, 5.0]);

        m.row_set_range(2, 1, &[-1.0, -2.0, -3.0, -4.0]);
        assert_eq!(m.data(), &[0.0, 1.0, -1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn test_row_set_short_and_long() {
        let mut m = counting(3, 2);
        m.row_set(0, &[9.0]);
        assert_eq!(m.data(), &[9.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        // Values past the selected rows are ignored
        m.row_set(2, &[7.0, 8.0, 100.0]);
        assert_eq!(m.data(), &[9.0, 1.0, 2.0, 3.0, 7.0, 8.0]);
    }

    #[test]
    fn test_row_set_chaining() {
        let mut m = Matrix::zeroes(2, 2).unwrap();
        m.row_set(0, &[1.0, 2.0]).row_set(1, &[3.0, 4.0]);
        assert_eq!(m.data(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_col_set_square() {
        let mut m = counting(3, 3);
        m.col_set(1, &[10.0, 11.0, 12.0]);
        assert_eq!(m.data(), &[0.0, 10.0, 2.0, 3.0, 11.0, 5.0, 6.0, 12.0, 8.0]);
        assert_eq!(m.col(1).unwrap().data(), &[10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_col_set_range() {
        let mut m = Matrix::zeroes(3, 3).unwrap();
        m.col_set_range(0, 1, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.data(), &[1.0, 4.0, 0.0, 2.0, 5.0, 0.0, 3.0, 6.0, 0.0]);
    }

    #[test]
    fn test_col_set_skips_outside_buffer() {
        // rows > columns: the last targets fall past the end and are skipped
        let mut m = Matrix::zeroes(1, 3).unwrap();
        m.col_set(1, &[1.0, 2.0, 3.0]);
        assert_eq!(m.data(), &[0.0, 1.0, 0.0]);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn test_diag() {
        let d = Matrix::eye(4).unwrap().diag();
        assert_eq!(d.machine_string(), Matrix::ones(1, 4).unwrap().machine_string());

        let m = counting(2, 3);
        assert_eq!(m.diag().data(), &[0.0, 3.0]);
    }

    #[test]
    fn test_trace() {
        assert_eq!(Matrix::eye(4).unwrap().trace(), 4.0);
        // Sums the whole buffer, not just the diagonal
        assert_eq!(counting(2, 2).trace(), 6.0);
    }

    #[test]
    fn test_rows_iter() {
        let m = counting(3, 2);
        let rows: Vec<Matrix> = m.rows_iter().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].data(), &[2.0, 3.0]);
        assert_eq!(m.rows_iter().len(), 3);
        assert_eq!(m.rows_iter().next_back().unwrap(), m.row(2).unwrap());
    }

    #[test]
    fn test_cols_iter() {
        let m = counting(3, 2);
        let cols: Vec<Matrix> = m.cols_iter().collect();

        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0], m.col(0).unwrap());
        assert_eq!(cols[1].data(), &[1.0, 3.0, 5.0]);

        // Restartable
        assert_eq!(m.cols_iter().count(), 2);
    }
}
