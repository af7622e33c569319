// crates/dec-drift/src/mapper.rs
//
// Nearest-vector mapping: project each contextual embedding onto the
// static vocabulary.

use rayon::prelude::*;
use tracing::debug;

use dec_core::error::DecError;
use dec_core::traits::NearestNeighbor;
use dec_core::vector::Vector;
use dec_core::vocabulary::Neighbor;

/// Sequences at least this long are mapped on the rayon pool by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Map every embedding to its nearest vocabulary entry, preserving order.
///
/// Lookups are independent, so sequences of `parallel_threshold` or more
/// embeddings fan out across the rayon pool. The output always has the same
/// length and order as `embeddings`. If lookups fail, the error reported
/// is the one at the lowest position, in both modes.
pub fn map_sequence<N>(
    index: &N,
    embeddings: &[Vector],
    parallel_threshold: usize,
) -> Result<Vec<Neighbor>, DecError>
where
    N: NearestNeighbor + ?Sized,
{
    if embeddings.is_empty() {
        return Err(DecError::EmptySequence);
    }
    if index.is_empty() {
        return Err(DecError::EmptyVocabulary);
    }

    let parallel = embeddings.len() >= parallel_threshold;
    debug!(
        tokens = embeddings.len(),
        vocabulary = index.len(),
        parallel,
        "mapping embeddings to nearest static vectors"
    );

    if parallel {
        // Gather every outcome first so the earliest error wins by position.
        let outcomes: Vec<Result<Neighbor, DecError>> =
            embeddings.par_iter().map(|e| index.nearest(e)).collect();
        outcomes.into_iter().collect()
    } else {
        embeddings.iter().map(|e| index.nearest(e)).collect()
    }
}
