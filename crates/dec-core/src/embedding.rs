// crates/dec-core/src/embedding.rs
//
// Deterministic pseudo-embeddings for fixtures and dry runs.
//
// Real embeddings come from an external provider. These hash-derived vectors
// stand in when a reproducible vocabulary or token sequence is needed without
// a model: the same text always produces the same unit vector.

use sha2::{Digest, Sha256};

use crate::error::DecError;
use crate::vector::Vector;

/// Hash `text` with each component index into a unit-length vector.
///
/// Components are drawn from [-1, 1] before L2 normalization.
pub fn pseudo_embedding(text: &str, dimensions: usize) -> Result<Vector, DecError> {
    let mut raw = Vec::with_capacity(dimensions);
    for i in 0..dimensions {
        let digest = Sha256::new()
            .chain_update(text.as_bytes())
            .chain_update((i as u64).to_le_bytes())
            .finalize();
        let bits = u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]);
        raw.push(((bits as f64 / u32::MAX as f64) * 2.0 - 1.0) as f32);
    }

    let norm = raw.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        raw.iter_mut().for_each(|v| *v /= norm);
    }

    Vector::new(raw)
}

/// Mix two pseudo-embeddings: `(1 - weight) * base + weight * noise`.
///
/// Used to fabricate contextual embeddings that sit near a static word vector.
pub fn perturb(base: &Vector, noise: &Vector, weight: f32) -> Result<Vector, DecError> {
    base.check_dimension(noise)?;
    let mixed = base
        .as_slice()
        .iter()
        .zip(noise.as_slice())
        .map(|(b, n)| (1.0 - weight) * b + weight * n)
        .collect();
    Vector::new(mixed)
}
