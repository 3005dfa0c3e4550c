//! Tabular observational data: named numeric columns, rows as observations.

use std::collections::HashSet;

use serde::Serialize;

use crate::edge::NodeName;
use crate::error::DatasetError;

/// An ordered collection of named numeric columns and ordered rows.
///
/// Column order is stable and indexes adjacency matrices produced by
/// learners. Rows are stored row-major; a row is the unit of resampling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<NodeName>,
    values: Vec<f64>,
    n_rows: usize,
}

impl Dataset {
    /// Build a dataset from column names and rows.
    ///
    /// Every row must hold exactly one value per column; column names must
    /// be unique.
    pub fn new<I, N>(columns: I, rows: Vec<Vec<f64>>) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeName>,
    {
        let columns = Self::unique_columns(columns)?;
        let width = columns.len();
        let n_rows = rows.len();
        let mut values = Vec::with_capacity(n_rows * width);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(DatasetError::RowLength {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            values.extend(cells);
        }
        Ok(Self {
            columns,
            values,
            n_rows,
        })
    }

    /// Build a dataset from `(name, values)` column pairs of equal length.
    pub fn from_columns<N>(columns: Vec<(N, Vec<f64>)>) -> Result<Self, DatasetError>
    where
        N: Into<NodeName>,
    {
        let n_rows = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        let mut names = Vec::with_capacity(columns.len());
        let mut data = Vec::with_capacity(columns.len());
        for (name, values) in columns {
            names.push(name.into());
            data.push(values);
        }
        let names = Self::unique_columns(names)?;
        for (col, values) in data.iter().enumerate() {
            if values.len() != n_rows {
                return Err(DatasetError::ColumnLength {
                    column: names[col].0.clone(),
                    expected: n_rows,
                    actual: values.len(),
                });
            }
        }
        let width = names.len();
        let mut values = Vec::with_capacity(n_rows * width);
        for row in 0..n_rows {
            values.extend(data.iter().map(|c| c[row]));
        }
        Ok(Self {
            columns: names,
            values,
            n_rows,
        })
    }

    fn unique_columns<I, N>(columns: I) -> Result<Vec<NodeName>, DatasetError>
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeName>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for name in columns {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(DatasetError::DuplicateColumn(name.0));
            }
            out.push(name);
        }
        Ok(out)
    }

    pub fn columns(&self) -> &[NodeName] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// True when the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.as_str() == name)
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.n_rows {
            return None;
        }
        let width = self.n_cols();
        Some(&self.values[index * width..(index + 1) * width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        let width = self.n_cols();
        (0..self.n_rows).map(move |i| &self.values[i * width..(i + 1) * width])
    }

    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if col >= self.n_cols() {
            return None;
        }
        self.row(row).map(|r| r[col])
    }

    /// Copy out one column by name.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, DatasetError> {
        let col = self
            .column_index(name)
            .ok_or_else(|| DatasetError::UnknownColumn(name.to_string()))?;
        Ok(self.rows().map(|r| r[col]).collect())
    }

    /// New dataset made of the given rows, in the given order. Indices may
    /// repeat.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self, DatasetError> {
        let width = self.n_cols();
        let mut values = Vec::with_capacity(indices.len() * width);
        for &index in indices {
            let row = self.row(index).ok_or(DatasetError::RowOutOfRange {
                index,
                rows: self.n_rows,
            })?;
            values.extend_from_slice(row);
        }
        Ok(Self {
            columns: self.columns.clone(),
            values,
            n_rows: indices.len(),
        })
    }
}
