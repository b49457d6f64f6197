//! Live conversion session
//!
//! One session per conversion screen. Setters validate their input, reject
//! bad edits without touching committed state, and mark the session dirty;
//! [`ConversionSession::recompute`] brings the result and the equivalents
//! view back in sync. Recompute is synchronous and pure: when the host runs
//! it off the interactive thread, only the newest invocation's output should
//! be kept (superseding semantics). The session itself is meant to be owned
//! by a single logical caller and needs no locking.

use std::mem;

use metron_core::{format, NumericError, Real};
use metron_units::{ConversionError, Converter, Unit, CATALOG};
use thiserror::Error;
use tracing::{debug, warn};

use crate::options::SessionOptions;

const DEFAULT_VALUE: &str = "0";

/// Errors reported by session operations. Every error leaves the session in
/// its previous committed state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("input exceeds the maximum of {limit} characters")]
    InputTooLong { limit: usize },

    #[error("invalid input: {0}")]
    InvalidNumber(#[from] NumericError),

    #[error("unknown converter '{0}'")]
    UnknownConverter(String),

    #[error("converter '{0}' has no units")]
    EmptyConverter(String),

    #[error("unit '{unit}' does not belong to converter '{converter}'")]
    ForeignUnit { unit: String, converter: String },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// One row of the equivalents view: the current value expressed in another
/// unit of the active converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equivalent {
    /// Short code of the target unit.
    pub code: &'static str,
    /// Formatted value, with grouping separators when configured.
    pub display: String,
}

/// Orchestrates a live conversion over the static catalog.
pub struct ConversionSession {
    converter: &'static Converter,
    from: &'static Unit,
    to: &'static Unit,
    text: String,
    value: Real,
    result: String,
    equivalents: Vec<Equivalent>,
    dirty: bool,
    options: SessionOptions,
}

impl ConversionSession {
    /// Create a session on the catalog's default converter and unit pair.
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    pub fn with_options(options: SessionOptions) -> Self {
        let converter = CATALOG.default_converter();
        let (from, to) = converter
            .default_pair()
            .unwrap_or_else(|| unreachable!("default converter is populated"));
        ConversionSession {
            converter,
            from,
            to,
            text: DEFAULT_VALUE.to_string(),
            value: Real::zero(),
            result: DEFAULT_VALUE.to_string(),
            equivalents: Vec::new(),
            dirty: true,
            options,
        }
    }

    // ========== Accessors ==========

    pub fn converter(&self) -> &'static Converter {
        self.converter
    }

    pub fn from_unit(&self) -> &'static Unit {
        self.from
    }

    pub fn to_unit(&self) -> &'static Unit {
        self.to
    }

    /// The committed input text.
    pub fn value_text(&self) -> &str {
        &self.text
    }

    /// The result of the last [`recompute`](Self::recompute).
    pub fn result(&self) -> &str {
        &self.result
    }

    /// The equivalents view of the last recompute, ascending by value.
    pub fn equivalents(&self) -> &[Equivalent] {
        &self.equivalents
    }

    /// True when an input changed since the last recompute.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// One-line description of the last computed conversion, e.g.
    /// `"1 m = 39.37 in"`.
    pub fn summary(&self) -> String {
        format!(
            "{} {} = {} {}",
            self.text,
            self.from.code(),
            self.result,
            self.to.code()
        )
    }

    // ========== Selection ==========

    /// Activate a converter and reset the unit pair to its default.
    pub fn set_converter(&mut self, converter: &'static Converter) -> Result<(), SessionError> {
        let Some((from, to)) = converter.default_pair() else {
            return Err(SessionError::EmptyConverter(converter.id().to_string()));
        };
        self.converter = converter;
        self.from = from;
        self.to = to;
        self.dirty = true;
        Ok(())
    }

    /// Activate a converter by its stable id (persistence restore path).
    pub fn set_converter_id(&mut self, id: &str) -> Result<(), SessionError> {
        let converter = CATALOG
            .get(id)
            .ok_or_else(|| SessionError::UnknownConverter(id.to_string()))?;
        self.set_converter(converter)
    }

    /// Select the source unit. Rejected without state change when the unit
    /// is not a member of the active converter.
    pub fn set_from_unit(&mut self, unit: &'static Unit) -> Result<(), SessionError> {
        self.from = self.member(unit)?;
        self.dirty = true;
        Ok(())
    }

    /// Select the target unit. Same membership guard as
    /// [`set_from_unit`](Self::set_from_unit).
    pub fn set_to_unit(&mut self, unit: &'static Unit) -> Result<(), SessionError> {
        self.to = self.member(unit)?;
        self.dirty = true;
        Ok(())
    }

    /// Select the source unit by id within the active converter.
    pub fn set_from_unit_id(&mut self, id: &str) -> Result<(), SessionError> {
        self.from = self.member_by_id(id)?;
        self.dirty = true;
        Ok(())
    }

    /// Select the target unit by id within the active converter.
    pub fn set_to_unit_id(&mut self, id: &str) -> Result<(), SessionError> {
        self.to = self.member_by_id(id)?;
        self.dirty = true;
        Ok(())
    }

    fn member(&self, unit: &'static Unit) -> Result<&'static Unit, SessionError> {
        if !self.converter.contains(unit) {
            warn!(
                unit = unit.id(),
                converter = self.converter.id(),
                "rejected selection of foreign unit"
            );
            return Err(SessionError::ForeignUnit {
                unit: unit.id().to_string(),
                converter: self.converter.id().to_string(),
            });
        }
        Ok(unit)
    }

    fn member_by_id(&self, id: &str) -> Result<&'static Unit, SessionError> {
        self.converter
            .unit_by_id(id)
            .ok_or_else(|| SessionError::ForeignUnit {
                unit: id.to_string(),
                converter: self.converter.id().to_string(),
            })
    }

    // ========== Editing ==========

    /// Commit new input text.
    ///
    /// Blank input falls back to `"0"`; a redundant leading zero in front
    /// of another digit is dropped. Over-long or malformed input is
    /// rejected as a value; the previous text, value and result stay
    /// untouched.
    pub fn set_value(&mut self, text: &str) -> Result<(), SessionError> {
        let normalized = normalize_input(text);

        if normalized.chars().count() > self.options.max_input_len {
            warn!(len = normalized.len(), "rejected over-long input");
            return Err(SessionError::InputTooLong {
                limit: self.options.max_input_len,
            });
        }

        let value: Real = match normalized.parse() {
            Ok(v) => v,
            Err(err) => {
                warn!(input = %normalized, %err, "rejected malformed input");
                return Err(SessionError::InvalidNumber(err));
            }
        };

        self.text = normalized;
        self.value = value;
        self.dirty = true;
        Ok(())
    }

    /// Exchange the source and target units.
    pub fn swap(&mut self) {
        mem::swap(&mut self.from, &mut self.to);
        self.dirty = true;
        debug!(from = self.from.id(), to = self.to.id(), "units swapped");
    }

    /// Reset the input to the default value.
    pub fn clear(&mut self) {
        self.text = DEFAULT_VALUE.to_string();
        self.value = Real::zero();
        self.dirty = true;
    }

    // ========== Recompute ==========

    /// Bring `result` and the equivalents view in sync with the current
    /// inputs (dirty → clean).
    ///
    /// Pure and idempotent: calling it repeatedly with unchanged inputs
    /// produces identical output, and a rerun cleanly supersedes any prior
    /// run. On a conversion failure (a unit-table bug) the previous output
    /// is kept and the session stays dirty.
    pub fn recompute(&mut self) -> Result<(), SessionError> {
        let converted = self.converter.convert(self.from, self.to, &self.value)?;
        let result = format::format_display(
            converted.to_f64(),
            self.options.decimal_places,
            self.options.max_result_len,
        );

        let threshold = Real::Exact(self.options.min_magnitude.clone());
        let mut rows: Vec<(Real, &'static Unit)> = Vec::new();
        for unit in self.converter.units() {
            if unit == self.from || unit == self.to {
                continue;
            }
            let value = self.converter.convert(self.from, unit, &self.value)?;
            if value.abs() < threshold {
                continue;
            }
            rows.push((value, unit));
        }
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        self.result = result;
        self.equivalents = rows
            .into_iter()
            .map(|(value, unit)| Equivalent {
                code: unit.code(),
                display: format::format_grouped(
                    value.to_f64(),
                    self.options.decimal_places,
                    self.options.grouping,
                ),
            })
            .collect();
        self.dirty = false;

        debug!(
            converter = self.converter.id(),
            from = self.from.id(),
            to = self.to.id(),
            value = %self.text,
            result = %self.result,
            equivalents = self.equivalents.len(),
            "recomputed"
        );
        Ok(())
    }
}

impl Default for ConversionSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank input becomes the default value; a leading zero directly followed
/// by another digit is dropped (typing "05" yields "5").
fn normalize_input(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return DEFAULT_VALUE.to_string();
    }
    let bytes = trimmed.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' && bytes[1].is_ascii_digit() {
        return trimmed[1..].to_string();
    }
    trimmed.to_string()
}
