//! Matcalc Core - Fundamental types
//!
//! This crate provides the numeric foundation for Matcalc:
//! - `Decimal`: exact decimal numbers rounded to a fixed number of
//!   significant digits after every operation
//! - `Context`: explicit precision configuration used to build decimals
//! - `DecimalError`: typed errors for parsing and division

mod decimal;

pub use decimal::{Context, Decimal, DecimalError, DEFAULT_PRECISION};
