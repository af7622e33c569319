// crates/dec-drift/src/path.rs
//
// Path composers: reduce an ordered vector sequence to a trajectory.
//
// Both sequences in a cross-check go through the same composer, so their
// paths always have matching shape when the inputs have matching length.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use dec_core::error::DecError;
use dec_core::path::Path;
use dec_core::traits::PathComposer;
use dec_core::vector::Vector;

/// Which trajectory representation to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Successive differences `v[i+1] - v[i]`.
    #[default]
    Displacement,
    /// The points themselves, in order.
    Position,
}

impl PathKind {
    pub fn composer(&self) -> Box<dyn PathComposer> {
        match self {
            PathKind::Displacement => Box::new(DisplacementPath),
            PathKind::Position => Box::new(PositionPath),
        }
    }
}

impl FromStr for PathKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "displacement" => Ok(PathKind::Displacement),
            "position" => Ok(PathKind::Position),
            other => Err(format!("unknown path kind '{}'", other)),
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Displacement => write!(f, "displacement"),
            PathKind::Position => write!(f, "position"),
        }
    }
}

/// Returns the shared dimension, or the first mismatch.
fn sequence_dimension(sequence: &[Vector]) -> Result<usize, DecError> {
    let first = sequence.first().ok_or(DecError::EmptySequence)?;
    for v in &sequence[1..] {
        first.check_dimension(v)?;
    }
    Ok(first.dimension())
}

fn widen(v: &Vector) -> Vec<f64> {
    v.as_slice().iter().map(|x| *x as f64).collect()
}

/// Trajectory as the list of step displacements.
///
/// A single-vector sequence has no steps and yields an empty path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplacementPath;

impl PathComposer for DisplacementPath {
    fn compose(&self, sequence: &[Vector]) -> Result<Path, DecError> {
        let dimension = sequence_dimension(sequence)?;
        let steps = sequence
            .windows(2)
            .map(|pair| {
                pair[1]
                    .as_slice()
                    .iter()
                    .zip(pair[0].as_slice())
                    .map(|(next, prev)| *next as f64 - *prev as f64)
                    .collect()
            })
            .collect();
        Path::new(dimension, steps)
    }
}

/// Trajectory as the ordered points visited.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionPath;

impl PathComposer for PositionPath {
    fn compose(&self, sequence: &[Vector]) -> Result<Path, DecError> {
        let dimension = sequence_dimension(sequence)?;
        Path::new(dimension, sequence.iter().map(widen).collect())
    }
}
