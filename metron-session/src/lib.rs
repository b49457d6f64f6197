//! Metron Session - Conversion orchestration
//!
//! Holds the live selection of a conversion screen (converter, unit pair,
//! input text) and recomputes the result plus the "value in other units"
//! view on demand. The engine itself never debounces or spawns work; pacing
//! is the host's policy.

mod options;
mod session;

pub use options::SessionOptions;
pub use session::{ConversionSession, Equivalent, SessionError};
