//! Unit representation with exact conversion rules
//!
//! Every unit maps to and from the canonical base unit of its quantity kind
//! through a [`Mapping`]: plain scaling for linear units, slope/intercept for
//! scales such as temperature. Both directions are exact for exact inputs,
//! so `from_base(to_base(x)) == x` holds without rounding.

use metron_core::{NumericError, Rational, Real};
use serde::Serialize;
use std::fmt;

use crate::system::MeasurementSystem;

/// Conversion rule between a unit and the base unit of its quantity kind.
#[derive(Debug, Clone, Serialize)]
pub enum Mapping {
    /// `base = value * factor`
    Linear { factor: Real },
    /// `base = value * slope + intercept`
    Affine { slope: Real, intercept: Real },
}

impl Mapping {
    /// Convert a value in this unit to the base unit.
    pub fn to_base(&self, value: &Real) -> Real {
        match self {
            Mapping::Linear { factor } => value.mul(factor),
            Mapping::Affine { slope, intercept } => value.mul(slope).add(intercept),
        }
    }

    /// Convert a value in the base unit to this unit.
    ///
    /// Fails only for a degenerate mapping (zero factor or slope), which is
    /// a bug in the unit table rather than a user error.
    pub fn from_base(&self, value: &Real) -> Result<Real, NumericError> {
        match self {
            Mapping::Linear { factor } => value.checked_div(factor),
            Mapping::Affine { slope, intercept } => value.sub(intercept).checked_div(slope),
        }
    }
}

/// A named, grouped, measurable unit.
///
/// The `id` is a stable string used as a persistence key by external
/// callers; it is globally unique and must never be reused for a different
/// quantity kind across versions.
#[derive(Debug, Clone, Serialize)]
pub struct Unit {
    id: &'static str,
    title: &'static str,
    code: &'static str,
    system: MeasurementSystem,
    mapping: Mapping,
}

impl Unit {
    /// A linear unit: `base = value * factor`.
    pub fn linear(
        id: &'static str,
        system: MeasurementSystem,
        title: &'static str,
        code: &'static str,
        factor: Rational,
    ) -> Self {
        Unit {
            id,
            title,
            code,
            system,
            mapping: Mapping::Linear {
                factor: factor.into(),
            },
        }
    }

    /// An affine unit: `base = value * slope + intercept`.
    pub fn affine(
        id: &'static str,
        system: MeasurementSystem,
        title: &'static str,
        code: &'static str,
        slope: Rational,
        intercept: Rational,
    ) -> Self {
        Unit {
            id,
            title,
            code,
            system,
            mapping: Mapping::Affine {
                slope: slope.into(),
                intercept: intercept.into(),
            },
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Short display code, e.g. `"cm"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn system(&self) -> MeasurementSystem {
        self.system
    }

    /// Convert a value in this unit to the quantity kind's base unit.
    pub fn to_base(&self, value: &Real) -> Real {
        self.mapping.to_base(value)
    }

    /// Convert a value in the base unit to this unit.
    pub fn from_base(&self, value: &Real) -> Result<Real, NumericError> {
        self.mapping.from_base(value)
    }
}

impl PartialEq for Unit {
    /// Units are identified by their stable id.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Unit {}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centimetre() -> Unit {
        Unit::linear(
            "length_centimetre",
            MeasurementSystem::Si,
            "Centimetre",
            "cm",
            Rational::ratio(1, 100),
        )
    }

    fn fahrenheit() -> Unit {
        // base Celsius: C = (F - 32) * 5/9
        Unit::affine(
            "temperature_fahrenheit",
            MeasurementSystem::UsCustomary,
            "Fahrenheit",
            "°F",
            Rational::ratio(5, 9),
            Rational::ratio(-160, 9),
        )
    }

    #[test]
    fn test_linear_round_trip_is_exact() {
        let cm = centimetre();
        let v: Real = "123.456".parse().unwrap();
        let back = cm.from_base(&cm.to_base(&v)).unwrap();
        assert_eq!(back, v);
        assert!(back.is_exact());
    }

    #[test]
    fn test_affine_conversion() {
        let f = fahrenheit();
        let boiling = f.to_base(&Real::from_i64(212));
        assert_eq!(boiling, Real::from_i64(100));
        let freezing = f.from_base(&Real::zero()).unwrap();
        assert_eq!(freezing, Real::from_i64(32));
    }

    #[test]
    fn test_affine_round_trip_is_exact() {
        let f = fahrenheit();
        let v: Real = "98.6".parse().unwrap();
        let back = f.from_base(&f.to_base(&v)).unwrap();
        assert_eq!(back, v);
        assert!(back.is_exact());
    }

    #[test]
    fn test_zero_factor_is_a_table_bug() {
        let broken = Unit::linear(
            "length_broken",
            MeasurementSystem::Other,
            "Broken",
            "x",
            Rational::zero(),
        );
        assert_eq!(
            broken.from_base(&Real::from_i64(1)),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_identity_by_id() {
        let a = centimetre();
        let b = centimetre();
        assert_eq!(a, b);
        assert_ne!(a, fahrenheit());
    }
}
