// crates/dec-drift/src/scorer.rs
//
// Drift scorers: distance between two comparable trajectories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use dec_core::error::DecError;
use dec_core::path::Path;
use dec_core::traits::DriftScorer;
use dec_core::verdict::DriftScore;

/// Which distance to measure between the two paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftMetric {
    /// Cosine distance over the flattened paths, in [0, 2].
    #[default]
    Cosine,
    /// Root-mean-square per-step Euclidean distance, in [0, inf).
    Euclidean,
}

impl DriftMetric {
    pub fn scorer(&self) -> Box<dyn DriftScorer> {
        match self {
            DriftMetric::Cosine => Box::new(CosineDrift),
            DriftMetric::Euclidean => Box::new(EuclideanDrift),
        }
    }
}

impl FromStr for DriftMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cosine" => Ok(DriftMetric::Cosine),
            "euclidean" | "l2" => Ok(DriftMetric::Euclidean),
            other => Err(format!("unknown drift metric '{}'", other)),
        }
    }
}

impl fmt::Display for DriftMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriftMetric::Cosine => write!(f, "cosine"),
            DriftMetric::Euclidean => write!(f, "euclidean"),
        }
    }
}

/// `1 - cos(a, b)` over the flattened step vectors.
///
/// Two zero-norm paths (including two empty ones) are identical and score 0.
/// A zero-norm path against a moving one scores 1, the orthogonal value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineDrift;

impl DriftScorer for CosineDrift {
    fn score(&self, a: &Path, b: &Path) -> Result<DriftScore, DecError> {
        a.check_comparable(b)?;
        if a == b {
            return Ok(DriftScore::ZERO);
        }

        let mut dot = 0.0_f64;
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        for (x, y) in a.flattened().zip(b.flattened()) {
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }

        let score = match (norm_a == 0.0, norm_b == 0.0) {
            (true, true) => 0.0,
            (true, false) | (false, true) => 1.0,
            (false, false) => 1.0 - dot / (norm_a.sqrt() * norm_b.sqrt()),
        };
        Ok(DriftScore(score.clamp(0.0, 2.0)))
    }
}

/// L2 distance between the flattened paths, normalized by `sqrt(steps)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDrift;

impl DriftScorer for EuclideanDrift {
    fn score(&self, a: &Path, b: &Path) -> Result<DriftScore, DecError> {
        a.check_comparable(b)?;
        if a.step_count() == 0 {
            return Ok(DriftScore::ZERO);
        }
        let sum_sq: f64 = a
            .flattened()
            .zip(b.flattened())
            .map(|(x, y)| (x - y) * (x - y))
            .sum();
        Ok(DriftScore((sum_sq / a.step_count() as f64).sqrt()))
    }
}
