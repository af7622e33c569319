// crates/dec-core/src/vector.rs
//
// Fixed-dimension float vector with validated construction.
//
// Every vector handled by the pipeline goes through `Vector::new`, so the
// rest of the workspace can assume a non-zero dimension and finite values.
// Components are stored as f32 (the width embedding providers emit) and all
// accumulation happens in f64.

use serde::{Deserialize, Serialize};

use crate::error::DecError;

/// A dense vector of known, non-zero dimension with finite components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct Vector {
    values: Vec<f32>,
}

impl Vector {
    /// Build a vector, rejecting empty input and NaN/infinite components.
    pub fn new(values: Vec<f32>) -> Result<Self, DecError> {
        if values.is_empty() {
            return Err(DecError::InvalidVector(
                "vector must have at least one dimension".to_string(),
            ));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(DecError::InvalidVector(format!(
                "component {} is not finite ({})",
                pos, values[pos]
            )));
        }
        Ok(Self { values })
    }

    /// Number of components.
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Euclidean norm, accumulated in f64.
    pub fn norm(&self) -> f64 {
        self.values
            .iter()
            .map(|x| (*x as f64) * (*x as f64))
            .sum::<f64>()
            .sqrt()
    }

    /// Fail with `DimensionMismatch` unless `other` has the same dimension.
    pub fn check_dimension(&self, other: &Vector) -> Result<(), DecError> {
        if self.dimension() != other.dimension() {
            return Err(DecError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<f32>> for Vector {
    type Error = DecError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Vector::new(values)
    }
}

impl From<Vector> for Vec<f32> {
    fn from(v: Vector) -> Self {
        v.values
    }
}

/// Cosine similarity between two equal-length slices.
///
/// Returns 0.0 when either side has zero magnitude. Callers are responsible
/// for checking dimensions first.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    dot / denom
}

/// Squared Euclidean distance between two equal-length slices.
pub fn squared_euclidean(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = *x as f64 - *y as f64;
            d * d
        })
        .sum()
}
