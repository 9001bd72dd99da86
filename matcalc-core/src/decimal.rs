//! Fixed-precision decimal numbers using dashu
//!
//! Uses dashu-float (DBig) for exact decimal arithmetic. Every value is
//! pinned to a significant-digit precision, so each arithmetic operation
//! rounds its result to the working precision instead of accumulating
//! unbounded digits.

use dashu_float::DBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for decimal operations
#[derive(Debug, Clone, Error)]
pub enum DecimalError {
    #[error("Invalid number format: {0}")]
    Parse(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Default precision for calculations (significant decimal digits)
pub const DEFAULT_PRECISION: usize = 5;

/// Precision configuration for building decimals
///
/// Replaces process-wide precision state with an explicit value: every
/// `Decimal` produced through a context carries the context's precision,
/// and dashu rounds each operation's result to the operands' precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    precision: usize,
}

impl Context {
    /// Create a context with the given significant-digit precision
    pub const fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Significant digits kept after each operation
    pub const fn precision(&self) -> usize {
        self.precision
    }

    /// Parse a decimal from text: "123", "3.14", "-42", "1.5e10"
    ///
    /// The value is rounded to the context precision on entry.
    pub fn parse(&self, s: &str) -> Result<Decimal, DecimalError> {
        let inner: DBig = s
            .trim()
            .parse()
            .map_err(|_| DecimalError::Parse(s.trim().to_string()))?;
        Ok(Decimal::pinned(inner, self.precision))
    }

    /// Create from i64 at the context precision
    pub fn from_i64(&self, n: i64) -> Decimal {
        Decimal::pinned(DBig::from(n), self.precision)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

/// Fixed-precision decimal number
///
/// All operations return Results or new Decimals - never panic.
#[derive(Debug, Clone)]
pub struct Decimal {
    inner: DBig,
}

impl Decimal {
    // ========== Construction ==========

    /// Pin a DBig to the given significant-digit precision
    fn pinned(val: DBig, precision: usize) -> Self {
        Self {
            inner: val.with_precision(precision).value(),
        }
    }

    /// Zero at the default precision
    pub fn zero() -> Self {
        Self::pinned(DBig::ZERO, DEFAULT_PRECISION)
    }

    /// One at the default precision
    pub fn one() -> Self {
        Self::pinned(DBig::ONE, DEFAULT_PRECISION)
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    // ========== Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner + &other.inner,
        }
    }

    /// Subtraction
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner - &other.inner,
        }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            inner: &self.inner * &other.inner,
        }
    }

    /// Negation
    pub fn neg(&self) -> Self {
        Self {
            inner: -&self.inner,
        }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, DecimalError> {
        if other.is_zero() {
            Err(DecimalError::DivisionByZero)
        } else {
            Ok(Self {
                inner: &self.inner / &other.inner,
            })
        }
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Decimal {}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Context::default().parse(&s).map_err(serde::de::Error::custom)
    }
}
