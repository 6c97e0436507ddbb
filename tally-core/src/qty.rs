//! Quantity values: native float or arbitrary precision
//!
//! A `Qty` is either a native f64 or an arbitrary-precision decimal
//! (dashu-float's DBig). Arithmetic stays in f64 until a
//! precision-preserving operand shows up, then both sides promote to
//! DBig and the result keeps the richer representation.

use dashu_float::DBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for quantity arithmetic
#[derive(Debug, Clone, Error)]
pub enum QtyError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Working precision for arbitrary-precision values (decimal digits)
const DEFAULT_PRECISION: usize = 50;

/// A numeric quantity
///
/// All operations return new values or Results - never panic.
#[derive(Debug, Clone)]
pub enum Qty {
    /// Native floating point
    Float(f64),
    /// Arbitrary-precision decimal
    Big(DBig),
}

impl Qty {
    // ========== Construction ==========

    /// Ensure a DBig has adequate precision for calculations
    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(DEFAULT_PRECISION).value()
    }

    /// Create the native float variant
    pub fn from_f64(f: f64) -> Self {
        Qty::Float(f)
    }

    /// Create the native float variant from an integer
    pub fn from_i64(n: i64) -> Self {
        Qty::Float(n as f64)
    }

    /// Parse a decimal string into the arbitrary-precision variant
    pub fn from_str(s: &str) -> Result<Self, QtyError> {
        s.parse()
    }

    /// Wrap an existing DBig
    pub fn from_big(val: DBig) -> Self {
        Qty::Big(Self::with_work_precision(val))
    }

    /// The multiplicative identity (float variant)
    pub fn one() -> Self {
        Qty::Float(1.0)
    }

    /// Promote to DBig for mixed-variant arithmetic.
    /// Non-finite floats collapse to zero; callers validate finiteness first.
    fn to_big(&self) -> DBig {
        match self {
            Qty::Big(b) => b.clone(),
            Qty::Float(f) => {
                if !f.is_finite() {
                    return DBig::ZERO;
                }
                // Shortest round-trip formatting: parses back to the
                // exact decimal reading of the float, however small
                format!("{}", f)
                    .parse()
                    .map(Self::with_work_precision)
                    .unwrap_or(DBig::ZERO)
            }
        }
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        match self {
            Qty::Float(f) => *f == 0.0,
            Qty::Big(b) => *b == DBig::ZERO,
        }
    }

    /// Check if finite (DBig values always are)
    pub fn is_finite(&self) -> bool {
        match self {
            Qty::Float(f) => f.is_finite(),
            Qty::Big(_) => true,
        }
    }

    /// Check if strictly greater than zero
    pub fn is_positive(&self) -> bool {
        match self {
            Qty::Float(f) => *f > 0.0,
            Qty::Big(b) => *b > DBig::ZERO,
        }
    }

    // ========== Arithmetic ==========

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        match (self, other) {
            (Qty::Float(a), Qty::Float(b)) => Qty::Float(a * b),
            _ => Qty::Big(&self.to_big() * &other.to_big()),
        }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, QtyError> {
        if other.is_zero() {
            return Err(QtyError::DivisionByZero);
        }
        match (self, other) {
            (Qty::Float(a), Qty::Float(b)) => Ok(Qty::Float(a / b)),
            _ => Ok(Qty::Big(&self.to_big() / &other.to_big())),
        }
    }

    // ========== Conversion ==========

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Qty::Float(f) => Some(*f),
            Qty::Big(b) => b.to_string().parse::<f64>().ok().filter(|f| f.is_finite()),
        }
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Qty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Natural form of the representation in use: f64 renders "2" for
        // 2.0, DBig renders its exact decimal digits
        match self {
            Qty::Float(v) => write!(f, "{}", v),
            Qty::Big(b) => write!(f, "{}", b),
        }
    }
}

impl std::str::FromStr for Qty {
    type Err = QtyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner: DBig = s
            .trim()
            .parse()
            .map_err(|_| QtyError::ParseError(s.to_string()))?;
        Ok(Qty::Big(Self::with_work_precision(inner)))
    }
}

impl PartialEq for Qty {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Qty::Float(a), Qty::Float(b)) => a == b,
            _ => self.to_big() == other.to_big(),
        }
    }
}

impl From<f64> for Qty {
    fn from(f: f64) -> Self {
        Qty::Float(f)
    }
}

impl From<i64> for Qty {
    fn from(n: i64) -> Self {
        Qty::from_i64(n)
    }
}

impl From<DBig> for Qty {
    fn from(val: DBig) -> Self {
        Qty::from_big(val)
    }
}

impl Serialize for Qty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Qty::Float(f) => serializer.serialize_f64(*f),
            Qty::Big(b) => serializer.serialize_str(&b.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Qty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only native numbers deserialize. Strings stay strings so the
        // registry can reject numeric-looking text as not numeric.
        let f = f64::deserialize(deserializer)?;
        Ok(Qty::Float(f))
    }
}
