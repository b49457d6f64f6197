//! A converter: the ordered unit list of one quantity kind
//!
//! Conversion always routes through the quantity kind's base unit, so a
//! catalog of N units needs N conversion rules rather than N² pairwise ones.

use metron_core::{NumericError, Real};
use thiserror::Error;

use crate::unit::Unit;

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("unit '{unit}' does not belong to converter '{converter}'")]
    ForeignUnit { unit: String, converter: String },

    #[error("numeric error: {0}")]
    Numeric(#[from] NumericError),
}

/// A named collection of units sharing one canonical base.
#[derive(Debug, Clone)]
pub struct Converter {
    id: &'static str,
    title: &'static str,
    units: Vec<Unit>,
    default_pair: (usize, usize),
}

impl Converter {
    /// Create a converter. The default from/to pair is the first two units;
    /// override it with [`Converter::with_default_pair`].
    pub fn new(id: &'static str, title: &'static str, units: Vec<Unit>) -> Self {
        Converter {
            id,
            title,
            units,
            default_pair: (0, 1),
        }
    }

    /// Override the pair of unit indices selected when this converter is
    /// activated (e.g. metre→inch for Length).
    pub fn with_default_pair(mut self, from: usize, to: usize) -> Self {
        debug_assert!(from < self.units.len() && to < self.units.len());
        self.default_pair = (from, to);
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Placeholder converters carry no units and must not be selectable.
    pub fn has_units(&self) -> bool {
        self.units.len() >= 2
    }

    /// Membership test, by stable id.
    pub fn contains(&self, unit: &Unit) -> bool {
        self.units.iter().any(|u| u == unit)
    }

    /// Look up a member unit by its stable id (persistence restore path).
    pub fn unit_by_id(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id() == id)
    }

    /// The from/to units selected when this converter is activated.
    /// `None` for placeholder converters.
    pub fn default_pair(&self) -> Option<(&Unit, &Unit)> {
        if !self.has_units() {
            return None;
        }
        let (from, to) = self.default_pair;
        Some((&self.units[from], &self.units[to]))
    }

    /// Convert `value` from one member unit to another by routing through
    /// the base unit.
    pub fn convert(&self, from: &Unit, to: &Unit, value: &Real) -> Result<Real, ConversionError> {
        for unit in [from, to] {
            if !self.contains(unit) {
                return Err(ConversionError::ForeignUnit {
                    unit: unit.id().to_string(),
                    converter: self.id.to_string(),
                });
            }
        }
        let in_base = from.to_base(value);
        Ok(to.from_base(&in_base)?)
    }
}

impl PartialEq for Converter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Converter {}
