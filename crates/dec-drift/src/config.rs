// crates/dec-drift/src/config.rs
//
// Detector configuration. Deserializes from the `[detector]` table of the
// CLI's TOML file; every field has a default.

use serde::{Deserialize, Serialize};

use dec_core::error::DecError;
use dec_index::NearestMetric;

use crate::gate::{validate_threshold, DEFAULT_THRESHOLD};
use crate::mapper::DEFAULT_PARALLEL_THRESHOLD;
use crate::path::PathKind;
use crate::scorer::DriftMetric;

/// Tunable policy for one cross-check run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Drift above this value is flagged as a potential hallucination.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Metric used to find each embedding's nearest static vector.
    #[serde(default)]
    pub nearest: NearestMetric,

    /// Trajectory representation built from each sequence.
    #[serde(default)]
    pub path: PathKind,

    /// Distance measured between the two trajectories.
    #[serde(default)]
    pub metric: DriftMetric,

    /// Minimum sequence length for parallel nearest-vector lookup.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            nearest: NearestMetric::default(),
            path: PathKind::default(),
            metric: DriftMetric::default(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl DetectorConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), DecError> {
        validate_threshold(self.threshold)?;
        Ok(())
    }
}
