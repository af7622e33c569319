// crates/dec-core/src/lib.rs
//
// dec-core: Core types, traits, and vocabulary loading for Dual Embedding
// Cross-Check (DEC).
//
// This is the leaf crate the other workspace crates depend on. It defines
// the validated vector type, the static vocabulary and its file formats,
// the trajectory and verdict types, the shared error type, and the traits
// at the pipeline's seams (lookup, path composition, drift scoring).

pub mod embedding;
pub mod error;
pub mod path;
pub mod traits;
pub mod vector;
pub mod verdict;
pub mod vocabulary;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use dec_core::Vector;`

pub use embedding::{perturb, pseudo_embedding};
pub use error::DecError;
pub use path::Path;
pub use traits::{DriftScorer, NearestNeighbor, PathComposer};
pub use vector::{cosine_similarity, squared_euclidean, Vector};
pub use verdict::{DriftScore, Verdict};
pub use vocabulary::{Neighbor, StaticVocabulary, VocabEntry};
