// crates/dec-index/src/lib.rs
//
// dec-index: Nearest-vector lookup for Dual Embedding Cross-Check.
//
// Provides the exact brute-force index used to project contextual
// embeddings onto a static word-vector vocabulary, and the metrics it
// ranks entries by.

pub mod brute;

// Re-export key types for ergonomic access from downstream crates.
pub use brute::{BruteForceIndex, NearestMetric};
