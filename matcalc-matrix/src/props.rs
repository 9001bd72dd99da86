//! Scalar matrix properties

use matcalc_core::Decimal;

use crate::types::Matrix;

impl Matrix {
    /// Determinant by Laplace expansion along the first row
    ///
    /// `det = Σ_j (-1)^j · a[0][j] · det(minor(0, j))`, base case: a 1×1
    /// matrix is its single element. Exponential in the dimension (O(n!));
    /// that bound is inherent to cofactor expansion, and switching to an
    /// elimination-based determinant would change the rounding behavior.
    pub fn determinant(&self) -> Decimal {
        let n = self.dim;
        if n == 1 {
            return self.data[0][0].clone();
        }

        let mut det = Decimal::zero();
        for j in 0..n {
            let term = self.data[0][j].mul(&self.minor(0, j).determinant());
            // signs alternate +, -, +, ... along the row
            det = if j % 2 == 0 {
                det.add(&term)
            } else {
                det.sub(&term)
            };
        }
        det
    }
}
