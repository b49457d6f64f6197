//! Measurement-system groups for display

use serde::{Deserialize, Serialize};
use std::fmt;

/// The measurement system a unit belongs to, used to group units in
/// selection lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementSystem {
    /// Système international
    Si,
    /// Imperial system
    Imperial,
    /// Imperial system as used in the United States
    ImperialUs,
    /// United States customary system
    UsCustomary,
    /// Historical or uncategorized scales
    Other,
}

impl MeasurementSystem {
    /// Display label for the group header.
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementSystem::Si => "System International",
            MeasurementSystem::Imperial => "Imperial System",
            MeasurementSystem::ImperialUs => "Imperial System (US)",
            MeasurementSystem::UsCustomary => "US Customary System",
            MeasurementSystem::Other => "Other",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
