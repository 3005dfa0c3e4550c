//! Dense square-ish numeric matrix as emitted by structure learners.

use crate::error::{DecodeError, DecodeResult};

/// A dense row-major numeric matrix.
///
/// Construction only checks that rows are rectangular; squareness and
/// agreement with the variable list are checked by [`crate::decode`].
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl AdjacencyMatrix {
    /// Build from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> DecodeResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut values = Vec::with_capacity(n_rows * n_cols);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != n_cols {
                return Err(DecodeError::RaggedRow {
                    row,
                    expected: n_cols,
                    actual: cells.len(),
                });
            }
            values.extend(cells);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            values,
        })
    }

    /// Build from a flat row-major buffer of exactly `rows * cols` cells.
    pub fn from_flat(rows: usize, cols: usize, values: Vec<f64>) -> DecodeResult<Self> {
        if rows.checked_mul(cols) != Some(values.len()) {
            return Err(DecodeError::BufferLength {
                rows,
                cols,
                len: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// An all-zero `n x n` matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            values: vec![0.0; n * n],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cell `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.values[row * self.cols + col] = value;
        true
    }

    /// First non-finite cell in row-major order.
    pub(crate) fn first_non_finite(&self) -> Option<(usize, usize, f64)> {
        self.values
            .iter()
            .position(|v| !v.is_finite())
            .map(|i| (i / self.cols, i % self.cols, self.values[i]))
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }
}
