// crates/dec-core/src/traits.rs

use crate::error::DecError;
use crate::path::Path;
use crate::vector::Vector;
use crate::verdict::DriftScore;
use crate::vocabulary::Neighbor;

/// Trait for nearest-vector lookup over a static vocabulary.
///
/// Implemented by dec-index (exact brute-force scan). Approximate indexes
/// can implement it too, as long as they keep first-entry tie-breaking.
pub trait NearestNeighbor: Send + Sync {
    /// Return the vocabulary entry closest to `query`.
    ///
    /// Fails with `EmptyVocabulary` when there is nothing to search and
    /// `DimensionMismatch` when `query` has the wrong dimension.
    fn nearest(&self, query: &Vector) -> Result<Neighbor, DecError>;

    /// Dimension of the indexed vectors, `None` when empty.
    fn dimension(&self) -> Option<usize>;

    /// Number of indexed entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for reducing a vector sequence to a trajectory.
///
/// Implemented by dec-drift path composers. Must be deterministic and
/// order-sensitive.
pub trait PathComposer: Send + Sync {
    fn compose(&self, sequence: &[Vector]) -> Result<Path, DecError>;
}

/// Trait for measuring the distance between two trajectories.
///
/// Implemented by dec-drift scorers. Identical paths must score zero.
pub trait DriftScorer: Send + Sync {
    fn score(&self, a: &Path, b: &Path) -> Result<DriftScore, DecError>;
}
