// crates/dec-index/src/brute.rs
//
// Exact nearest-vector lookup implementing the `NearestNeighbor` trait.
//
// Scans every vocabulary entry for each query: O(m) per lookup, O(n*m) for
// a whole sequence. Fine for vocabularies up to a few hundred thousand
// words; larger tables should sit behind an approximate index implementing
// the same trait.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use dec_core::error::DecError;
use dec_core::traits::NearestNeighbor;
use dec_core::vector::{cosine_similarity, squared_euclidean, Vector};
use dec_core::vocabulary::{Neighbor, StaticVocabulary};

/// Distance used to rank vocabulary entries against a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NearestMetric {
    /// `1 - cosine_similarity`, in [0, 2]. Zero-norm vectors sit at 1.0.
    #[default]
    Cosine,
    /// Straight-line L2 distance.
    Euclidean,
}

impl NearestMetric {
    /// Distance between two equal-length slices under this metric.
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f64 {
        match self {
            NearestMetric::Cosine => 1.0 - cosine_similarity(a, b),
            NearestMetric::Euclidean => squared_euclidean(a, b).sqrt(),
        }
    }
}

impl FromStr for NearestMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cosine" => Ok(NearestMetric::Cosine),
            "euclidean" | "l2" => Ok(NearestMetric::Euclidean),
            other => Err(format!("unknown nearest metric '{}'", other)),
        }
    }
}

impl fmt::Display for NearestMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NearestMetric::Cosine => write!(f, "cosine"),
            NearestMetric::Euclidean => write!(f, "euclidean"),
        }
    }
}

/// Brute-force index over a borrowed vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct BruteForceIndex<'a> {
    vocabulary: &'a StaticVocabulary,
    metric: NearestMetric,
}

impl<'a> BruteForceIndex<'a> {
    /// Index `vocabulary` with the default (cosine) metric.
    pub fn new(vocabulary: &'a StaticVocabulary) -> Self {
        Self::with_metric(vocabulary, NearestMetric::default())
    }

    pub fn with_metric(vocabulary: &'a StaticVocabulary, metric: NearestMetric) -> Self {
        Self { vocabulary, metric }
    }

    pub fn metric(&self) -> NearestMetric {
        self.metric
    }
}

impl NearestNeighbor for BruteForceIndex<'_> {
    fn nearest(&self, query: &Vector) -> Result<Neighbor, DecError> {
        let entries = self.vocabulary.entries();
        let first = entries.first().ok_or(DecError::EmptyVocabulary)?;
        first.vector.check_dimension(query)?;

        let mut best_index = 0;
        let mut best_distance = f64::INFINITY;
        for (i, entry) in entries.iter().enumerate() {
            let d = self.metric.distance(query.as_slice(), entry.vector.as_slice());
            // Strict comparison keeps the earliest entry on ties.
            if d < best_distance {
                best_index = i;
                best_distance = d;
            }
        }

        let entry = &entries[best_index];
        Ok(Neighbor {
            index: best_index,
            word: entry.word.clone(),
            vector: entry.vector.clone(),
            distance: best_distance,
        })
    }

    fn dimension(&self) -> Option<usize> {
        self.vocabulary.dimension()
    }

    fn len(&self) -> usize {
        self.vocabulary.len()
    }
}
