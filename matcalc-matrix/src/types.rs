//! Core matrix type

use std::fmt;

use matcalc_core::Decimal;
use thiserror::Error;

/// Error type for matrix operations
#[derive(Debug, Clone, Error)]
pub enum MatrixError {
    #[error("matrix must have at least one row")]
    Empty,

    #[error("row {row} has {got} elements, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Cannot invert singular matrix.")]
    Singular,
}

/// A square matrix of fixed-precision decimals
///
/// Invariant: at least one row, and every row has as many elements as
/// there are rows. Upheld by `from_rows`; all operations produce fresh
/// matrices and never mutate their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub(crate) data: Vec<Vec<Decimal>>,
    pub(crate) dim: usize,
}

impl Matrix {
    /// Create a matrix from nested rows, validating squareness
    pub fn from_rows(data: Vec<Vec<Decimal>>) -> Result<Self, MatrixError> {
        if data.is_empty() {
            return Err(MatrixError::Empty);
        }

        let dim = data.len();
        for (i, row) in data.iter().enumerate() {
            if row.len() != dim {
                return Err(MatrixError::RowLength {
                    row: i,
                    expected: dim,
                    got: row.len(),
                });
            }
        }

        Ok(Self { data, dim })
    }

    /// Internal constructor for rows built by the operations themselves
    pub(crate) fn from_raw(data: Vec<Vec<Decimal>>) -> Self {
        debug_assert!(!data.is_empty());
        debug_assert!(data.iter().all(|row| row.len() == data.len()));
        let dim = data.len();
        Self { data, dim }
    }

    /// The n×n identity matrix
    pub fn identity(dim: usize) -> Result<Self, MatrixError> {
        if dim == 0 {
            return Err(MatrixError::Empty);
        }
        let data = (0..dim)
            .map(|i| {
                (0..dim)
                    .map(|j| if i == j { Decimal::one() } else { Decimal::zero() })
                    .collect()
            })
            .collect();
        Ok(Self { data, dim })
    }

    /// Number of rows (== number of columns)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<&Decimal> {
        self.data.get(row)?.get(col)
    }

    /// Rows as slices, outermost first
    pub fn rows(&self) -> &[Vec<Decimal>] {
        &self.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", val)?;
            }
        }
        Ok(())
    }
}
