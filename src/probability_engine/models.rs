use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest number of dice in play the engines support.
pub const MAX_DICE: usize = 40;

/// Lowest and highest face values on a standard die.
pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;

// ---------------------------------------------------------------------------
// Probability presentation primitives
// ---------------------------------------------------------------------------

/// Three-tier classification of a bid's probability.
///
/// The thresholds are part of the engine contract: `>= 0.5` is favorable,
/// `>= 0.3` moderate, everything below unlikely. How a tier is rendered
/// (colors, icons) is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbabilityTier {
    Favorable,
    Moderate,
    Unlikely,
}

impl ProbabilityTier {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.5 {
            ProbabilityTier::Favorable
        } else if probability >= 0.3 {
            ProbabilityTier::Moderate
        } else {
            ProbabilityTier::Unlikely
        }
    }
}

impl fmt::Display for ProbabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbabilityTier::Favorable => write!(f, "Favorable"),
            ProbabilityTier::Moderate  => write!(f, "Moderate"),
            ProbabilityTier::Unlikely  => write!(f, "Unlikely"),
        }
    }
}

/// Format a probability as an integer percentage string, e.g. `"75%"`.
pub fn percentage_string(probability: f64) -> String {
    format!("{}%", (probability * 100.0).round() as i64)
}

/// One fully rendered probability reading: raw value, percentage string,
/// and tier. This is what the session layer hands to a display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilitySnapshot {
    pub probability: f64,
    pub percentage: String,
    pub tier: ProbabilityTier,
}

impl ProbabilitySnapshot {
    pub fn new(probability: f64) -> Self {
        ProbabilitySnapshot {
            probability,
            percentage: percentage_string(probability),
            tier: ProbabilityTier::from_probability(probability),
        }
    }

    /// The "nothing to show" reading: 0%, unlikely.
    pub fn zero() -> Self {
        ProbabilitySnapshot::new(0.0)
    }
}

impl Default for ProbabilitySnapshot {
    fn default() -> Self {
        ProbabilitySnapshot::zero()
    }
}
