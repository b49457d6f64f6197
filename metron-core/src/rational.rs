//! Exact rational arithmetic
//!
//! A fraction of two arbitrary-precision integers, kept in lowest terms
//! after every operation so chained conversions never accumulate rounding
//! error and the numerator/denominator magnitudes stay bounded.
//!
//! Invariants: the denominator is always positive and never zero; the sign
//! lives on the numerator alone.

use crate::error::NumericError;
use crate::format;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Exact rational number (numerator / denominator), always in lowest terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    // ========== Construction ==========

    /// Create a rational from numerator and denominator.
    ///
    /// Fails with [`NumericError::ZeroDenominator`] when `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self, NumericError> {
        if den.is_zero() {
            return Err(NumericError::ZeroDenominator);
        }
        Ok(Self::reduced(num, den))
    }

    /// Create a rational from integer literals.
    ///
    /// Intended for statically known values such as unit scale tables.
    /// Panics if `den` is zero, which is an authoring bug in the table,
    /// not a runtime condition.
    pub fn ratio(num: i128, den: i128) -> Self {
        assert!(den != 0, "rational literal with zero denominator");
        Self::reduced(BigInt::from(num), BigInt::from(den))
    }

    /// Create an integer-valued rational.
    pub fn from_i64(n: i64) -> Self {
        Self {
            numerator: BigInt::from(n),
            denominator: BigInt::one(),
        }
    }

    /// Zero (0/1).
    pub fn zero() -> Self {
        Self::from_i64(0)
    }

    /// One (1/1).
    pub fn one() -> Self {
        Self::from_i64(1)
    }

    /// Parse plain decimal text such as `"123"`, `"-0.25"` or `".5"`.
    ///
    /// The whole and fractional digits become the numerator over a power of
    /// ten. Exponent notation is rejected with
    /// [`NumericError::ExponentUnsupported`]; this engine deliberately does
    /// not accept it.
    pub fn from_decimal_str(text: &str) -> Result<Self, NumericError> {
        let (sign, digits) = match text.as_bytes().first() {
            Some(b'-') => (-1, &text[1..]),
            Some(b'+') => (1, &text[1..]),
            _ => (1, text),
        };

        let parts = format::split_number(digits);
        if parts.exponent.is_some() {
            return Err(NumericError::ExponentUnsupported(text.to_string()));
        }

        let whole = parts.whole;
        let fraction = parts.fraction.unwrap_or("");
        if whole.is_empty() && fraction.is_empty() {
            return Err(NumericError::Parse(text.to_string()));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::Parse(text.to_string()));
        }

        let mut concat = String::with_capacity(whole.len() + fraction.len());
        concat.push_str(whole);
        concat.push_str(fraction);
        let numerator = BigInt::parse_bytes(concat.as_bytes(), 10)
            .ok_or_else(|| NumericError::Parse(text.to_string()))?;
        let denominator = num_traits::pow(BigInt::from(10), fraction.len());

        Ok(Self::reduced(numerator * sign, denominator))
    }

    /// Reduce by GCD and move the sign onto the numerator.
    fn reduced(num: BigInt, den: BigInt) -> Self {
        if num.is_zero() {
            return Self::zero();
        }
        let g = num.gcd(&den);
        let mut numerator = num / &g;
        let mut denominator = den / g;
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    // ========== Arithmetic ==========

    /// Addition.
    pub fn add(&self, other: &Self) -> Self {
        Self::reduced(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// Subtraction.
    pub fn sub(&self, other: &Self) -> Self {
        Self::reduced(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// Multiplication.
    pub fn mul(&self, other: &Self) -> Self {
        Self::reduced(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// Division. Fails with [`NumericError::DivisionByZero`] when `other`
    /// is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumericError> {
        if other.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    /// Negation.
    pub fn neg(&self) -> Self {
        Self {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    // ========== Conversion ==========

    /// Best-effort f64 approximation, for display only.
    pub fn to_f64(&self) -> f64 {
        let num = self.numerator.to_f64();
        let den = self.denominator.to_f64();
        match (num, den) {
            (Some(n), Some(d)) if n.is_finite() && d.is_finite() => n / d,
            _ => {
                // One side overflows f64: drop the same number of low bits
                // from both sides, which preserves the ratio.
                let bits = self.numerator.bits().max(self.denominator.bits());
                let shift = bits.saturating_sub(128) as usize;
                let n = (&self.numerator >> shift).to_f64().unwrap_or(f64::NAN);
                let d = (&self.denominator >> shift).to_f64().unwrap_or(f64::NAN);
                n / d
            }
        }
    }
}

// ========== Trait Implementations ==========

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Total order via cross-multiplication; never goes through floats.
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so the inequality direction holds.
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        lhs.cmp(&rhs)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self {
            numerator: n,
            denominator: BigInt::one(),
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = NumericError;

    /// Accepts the `Display` form `"a/b"` as well as plain decimal text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((num, den)) = s.split_once('/') {
            let num: BigInt = num
                .trim()
                .parse()
                .map_err(|_| NumericError::Parse(s.to_string()))?;
            let den: BigInt = den
                .trim()
                .parse()
                .map_err(|_| NumericError::Parse(s.to_string()))?;
            return Self::new(num, den);
        }
        Self::from_decimal_str(s)
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction() {
        let r = Rational::ratio(6, 4);
        assert_eq!(r, Rational::ratio(3, 2));
        assert_eq!(r.to_string(), "3/2");
    }

    #[test]
    fn test_sign_normalization() {
        let r = Rational::ratio(1, -2);
        assert_eq!(r, Rational::ratio(-1, 2));
        assert!(r.is_negative());
        let r = Rational::ratio(-3, -9);
        assert_eq!(r, Rational::ratio(1, 3));
        assert!(!r.is_negative());
    }

    #[test]
    fn test_zero_denominator() {
        let err = Rational::new(BigInt::from(1), BigInt::from(0));
        assert_eq!(err, Err(NumericError::ZeroDenominator));
    }

    #[test]
    fn test_arithmetic() {
        let a = Rational::ratio(1, 3);
        let b = Rational::ratio(1, 6);
        assert_eq!(a.add(&b), Rational::ratio(1, 2));
        assert_eq!(a.sub(&b), Rational::ratio(1, 6));
        assert_eq!(a.mul(&b), Rational::ratio(1, 18));
        assert_eq!(a.checked_div(&b).unwrap(), Rational::from_i64(2));
    }

    #[test]
    fn test_div_by_zero() {
        let a = Rational::from_i64(1);
        assert_eq!(
            a.checked_div(&Rational::zero()),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_ordering_without_floats() {
        // 1/3 < 34/100 < 1000000000000000001/3000000000000000000
        let a = Rational::ratio(1, 3);
        let b = Rational::ratio(34, 100);
        let c = Rational::ratio(1_000_000_000_000_000_001, 3_000_000_000_000_000_000);
        assert!(a < b);
        assert!(a < c);
        assert!(c < b);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(
            Rational::from_decimal_str("123.456").unwrap(),
            Rational::ratio(123456, 1000)
        );
        assert_eq!(
            Rational::from_decimal_str("-0.25").unwrap(),
            Rational::ratio(-1, 4)
        );
        assert_eq!(
            Rational::from_decimal_str(".5").unwrap(),
            Rational::ratio(1, 2)
        );
        assert_eq!(
            Rational::from_decimal_str("7.").unwrap(),
            Rational::from_i64(7)
        );
    }

    #[test]
    fn test_parse_rejects_exponent() {
        assert!(matches!(
            Rational::from_decimal_str("1e5"),
            Err(NumericError::ExponentUnsupported(_))
        ));
        assert!(matches!(
            Rational::from_decimal_str("1.2E3"),
            Err(NumericError::ExponentUnsupported(_))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", ".", "abc", "1.2.3", "1-2", "--1"] {
            assert!(
                matches!(Rational::from_decimal_str(bad), Err(NumericError::Parse(_))),
                "expected parse error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_from_str_fraction_form() {
        let r: Rational = "5/9".parse().unwrap();
        assert_eq!(r, Rational::ratio(5, 9));
        let r: Rational = "-10/4".parse().unwrap();
        assert_eq!(r, Rational::ratio(-5, 2));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Rational::ratio(1, 4).to_f64(), 0.25);
        assert_eq!(Rational::ratio(-3, 2).to_f64(), -1.5);
    }

    #[test]
    fn test_to_f64_large_values() {
        // Both sides far beyond f64 range, ratio still representable.
        let big = num_traits::pow(BigInt::from(10), 400);
        let r = Rational::new(BigInt::from(3) * &big, big).unwrap();
        assert_eq!(r.to_f64(), 3.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let r = Rational::ratio(-7, 12);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"-7/12\"");
        let back: Rational = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_chained_operations_stay_reduced() {
        // Repeated multiply/divide through a scale factor must come back
        // to the exact starting value.
        let scale = Rational::ratio(254, 10000);
        let mut v = Rational::ratio(123456789, 1000);
        for _ in 0..50 {
            v = v.mul(&scale);
            v = v.checked_div(&scale).unwrap();
        }
        assert_eq!(v, Rational::ratio(123456789, 1000));
    }
}
