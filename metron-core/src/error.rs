//! Error type for numeric operations
//!
//! Numeric errors are values, not panics. Parse failures come from user
//! input and are recoverable; zero denominators and zero divisors indicate
//! a malformed unit definition and abort the operation that hit them.

use thiserror::Error;

/// Error type for rational/real number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("invalid number: {0}")]
    Parse(String),

    #[error("exponent notation is not supported: {0}")]
    ExponentUnsupported(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("denominator must be non-zero")]
    ZeroDenominator,
}
