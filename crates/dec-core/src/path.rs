// crates/dec-core/src/path.rs
//
// Trajectory representation shared by the path composers and drift scorers.

use serde::Serialize;

use crate::error::DecError;

/// An ordered list of per-step vectors, all of `dimension` components.
///
/// A path with zero steps is valid: it is what a single-token sequence
/// reduces to under displacement composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    dimension: usize,
    steps: Vec<Vec<f64>>,
}

impl Path {
    /// Build a path, checking every step against `dimension`.
    pub fn new(dimension: usize, steps: Vec<Vec<f64>>) -> Result<Self, DecError> {
        if let Some(bad) = steps.iter().find(|s| s.len() != dimension) {
            return Err(DecError::DimensionMismatch {
                expected: dimension,
                found: bad.len(),
            });
        }
        Ok(Self { dimension, steps })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[Vec<f64>] {
        &self.steps
    }

    /// All step components in order, as one flat sequence.
    pub fn flattened(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().flatten().copied()
    }

    /// Fail unless `other` has the same dimension and step count.
    pub fn check_comparable(&self, other: &Path) -> Result<(), DecError> {
        if self.dimension != other.dimension {
            return Err(DecError::DimensionMismatch {
                expected: self.dimension,
                found: other.dimension,
            });
        }
        if self.steps.len() != other.steps.len() {
            return Err(DecError::DimensionMismatch {
                expected: self.steps.len() * self.dimension,
                found: other.steps.len() * other.dimension,
            });
        }
        Ok(())
    }
}
