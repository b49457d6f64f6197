//! Session configuration
//!
//! All display and validation knobs are explicit here; nothing reads global
//! formatting state.

use metron_core::Rational;

/// Configuration for a [`crate::ConversionSession`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Maximum accepted input length, in characters.
    pub max_input_len: usize,
    /// Fractional digits in rendered results.
    pub decimal_places: usize,
    /// Maximum rendered length of the main result.
    pub max_result_len: usize,
    /// Equivalents whose converted magnitude falls below this are dropped.
    pub min_magnitude: Rational,
    /// Thousands separator for the equivalents view; `None` disables
    /// grouping. The caller picks the locale-appropriate character.
    pub grouping: Option<char>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            max_input_len: 12,
            decimal_places: 2,
            max_result_len: 12,
            min_magnitude: Rational::ratio(1, 10),
            grouping: Some(','),
        }
    }
}
