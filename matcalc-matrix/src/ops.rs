//! Matrix operations: minor, transpose, cofactor, adjugate, inverse

use matcalc_core::Decimal;

use crate::types::{Matrix, MatrixError};

impl Matrix {
    /// Submatrix with row `i` and column `j` removed
    ///
    /// Remaining rows and columns keep their relative order. Only called
    /// with `dim >= 2` and in-range indices produced by iteration.
    pub fn minor(&self, i: usize, j: usize) -> Matrix {
        debug_assert!(self.dim >= 2);
        debug_assert!(i < self.dim && j < self.dim);

        let data: Vec<Vec<Decimal>> = self
            .data
            .iter()
            .enumerate()
            .filter(|(r, _)| *r != i)
            .map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(c, _)| *c != j)
                    .map(|(_, val)| val.clone())
                    .collect()
            })
            .collect();
        Matrix::from_raw(data)
    }

    /// Transpose: `t[i][j] = m[j][i]`
    pub fn transpose(&self) -> Matrix {
        let data: Vec<Vec<Decimal>> = (0..self.dim)
            .map(|j| (0..self.dim).map(|i| self.data[i][j].clone()).collect())
            .collect();
        Matrix::from_raw(data)
    }

    /// Cofactor matrix: `c[i][j] = (-1)^(i+j) · det(minor(i, j))`
    ///
    /// The sign comes from the parity of `i + j` as a whole. A 1×1 matrix
    /// has the empty minor, whose determinant is 1 by convention.
    pub fn cofactor(&self) -> Matrix {
        if self.dim == 1 {
            return Matrix::from_raw(vec![vec![Decimal::one()]]);
        }

        let data: Vec<Vec<Decimal>> = (0..self.dim)
            .map(|i| {
                (0..self.dim)
                    .map(|j| {
                        let det = self.minor(i, j).determinant();
                        if (i + j) % 2 == 0 {
                            det
                        } else {
                            det.neg()
                        }
                    })
                    .collect()
            })
            .collect();
        Matrix::from_raw(data)
    }

    /// Adjugate: transpose of the cofactor matrix
    pub fn adjugate(&self) -> Matrix {
        self.cofactor().transpose()
    }

    /// Inverse: adjugate divided element-wise by the determinant
    ///
    /// Fails with `MatrixError::Singular` when the determinant is zero
    /// (after rounding to the working precision); the input is untouched
    /// and no partial result escapes.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self.determinant();
        if det.is_zero() {
            return Err(MatrixError::Singular);
        }

        let adj = self.adjugate();
        let mut data = Vec::with_capacity(self.dim);
        for row in &adj.data {
            let mut out = Vec::with_capacity(self.dim);
            for val in row {
                out.push(val.checked_div(&det).map_err(|_| MatrixError::Singular)?);
            }
            data.push(out);
        }
        Ok(Matrix::from_raw(data))
    }
}
