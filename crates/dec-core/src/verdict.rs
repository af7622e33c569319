// crates/dec-core/src/verdict.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary outcome of the decision gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Contextual trajectory agrees with the static-vector trajectory.
    Stable,
    /// Drift exceeded the threshold.
    PotentialHallucination,
}

impl Verdict {
    pub fn is_hallucination(&self) -> bool {
        matches!(self, Verdict::PotentialHallucination)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Stable => write!(f, "Stable"),
            Verdict::PotentialHallucination => write!(f, "Potential Hallucination"),
        }
    }
}

/// Distance between the two trajectories. Zero means identical paths.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriftScore(pub f64);

impl DriftScore {
    pub const ZERO: DriftScore = DriftScore(0.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for DriftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
