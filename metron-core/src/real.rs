//! Exact-or-approximate numeric value
//!
//! [`Real`] prefers the exact rational representation and only degrades to a
//! floating-point approximation when an operand already is one. The
//! degradation is one-directional: once a computation chain touches an
//! approximate value, every later result in that chain is approximate.
//! Exactness is therefore guaranteed only for rational-only chains, which is
//! all the conversion engine itself produces; the approximate arm exists for
//! callers that feed in values outside the rational domain.

use crate::error::NumericError;
use crate::rational::Rational;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A numeric value, exact when possible.
#[derive(Debug, Clone)]
pub enum Real {
    /// Exact rational value.
    Exact(Rational),
    /// Floating-point approximation; poisons further arithmetic.
    Approx(f64),
}

impl Real {
    // ========== Construction ==========

    pub fn from_i64(n: i64) -> Self {
        Real::Exact(Rational::from_i64(n))
    }

    pub fn zero() -> Self {
        Real::Exact(Rational::zero())
    }

    // ========== Predicates ==========

    pub fn is_exact(&self) -> bool {
        matches!(self, Real::Exact(_))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Real::Exact(r) => r.is_zero(),
            Real::Approx(x) => *x == 0.0,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Real::Exact(r) => r.is_negative(),
            Real::Approx(x) => *x < 0.0,
        }
    }

    // ========== Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        match (self, other) {
            (Real::Exact(a), Real::Exact(b)) => Real::Exact(a.add(b)),
            _ => Real::Approx(self.to_f64() + other.to_f64()),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        match (self, other) {
            (Real::Exact(a), Real::Exact(b)) => Real::Exact(a.sub(b)),
            _ => Real::Approx(self.to_f64() - other.to_f64()),
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        match (self, other) {
            (Real::Exact(a), Real::Exact(b)) => Real::Exact(a.mul(b)),
            _ => Real::Approx(self.to_f64() * other.to_f64()),
        }
    }

    /// Division. Fails with [`NumericError::DivisionByZero`] when `other`
    /// is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumericError> {
        if other.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        match (self, other) {
            (Real::Exact(a), Real::Exact(b)) => Ok(Real::Exact(a.checked_div(b)?)),
            _ => Ok(Real::Approx(self.to_f64() / other.to_f64())),
        }
    }

    pub fn abs(&self) -> Self {
        match self {
            Real::Exact(r) => Real::Exact(r.abs()),
            Real::Approx(x) => Real::Approx(x.abs()),
        }
    }

    // ========== Conversion ==========

    /// Materialize for display. This is the only point where floating-point
    /// error may reach the caller of an exact chain.
    pub fn to_f64(&self) -> f64 {
        match self {
            Real::Exact(r) => r.to_f64(),
            Real::Approx(x) => *x,
        }
    }
}

// ========== Trait Implementations ==========

impl From<Rational> for Real {
    fn from(r: Rational) -> Self {
        Real::Exact(r)
    }
}

impl From<i64> for Real {
    fn from(n: i64) -> Self {
        Real::from_i64(n)
    }
}

impl FromStr for Real {
    type Err = NumericError;

    /// Parses plain decimal text into an exact value. Exponent notation is
    /// rejected, matching [`Rational::from_decimal_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rational::from_decimal_str(s).map(Real::Exact)
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Real::Exact(a), Real::Exact(b)) => a == b,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    /// Exact cross-multiplied comparison when both sides are exact, plain
    /// f64 comparison otherwise.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Real::Exact(a), Real::Exact(b)) => a.cmp(b),
            _ => self
                .to_f64()
                .partial_cmp(&other.to_f64())
                .unwrap_or(Ordering::Equal),
        }
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Real::Exact(r) => write!(f, "{r}"),
            Real::Approx(x) => write!(f, "{x}"),
        }
    }
}

impl Serialize for Real {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Real {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if let Ok(r) = s.parse::<Rational>() {
            return Ok(Real::Exact(r));
        }
        s.parse::<f64>()
            .map(Real::Approx)
            .map_err(serde::de::Error::custom)
    }
}
