//! Matcalc Matrix - exact square-matrix operations
//!
//! Provides the calculator's linear-algebra core over fixed-precision
//! decimals:
//! - determinant (recursive Laplace expansion along the first row)
//! - submatrix extraction (minor)
//! - transpose
//! - cofactor matrix and adjugate
//! - inverse, with clean singularity detection
//!
//! Every operation is a pure function of an immutable square matrix.

mod ops;
mod props;
mod types;

pub use types::{Matrix, MatrixError};
