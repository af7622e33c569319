// crates/dec-drift/tests/cross_check.rs
//
// End-to-end tests of the cross-check pipeline through the public API:
// identity, boundary, monotonicity, length preservation, determinism,
// error scenarios, and pluggable lookup backends.

use dec_core::embedding::{perturb, pseudo_embedding};
use dec_core::error::DecError;
use dec_core::traits::NearestNeighbor;
use dec_core::vector::Vector;
use dec_core::verdict::{DriftScore, Verdict};
use dec_core::vocabulary::{Neighbor, StaticVocabulary};
use dec_drift::{
    detect_drift, gate, map_sequence, DetectorConfig, DriftDetector, DriftMetric, PathKind,
    DEFAULT_THRESHOLD,
};
use dec_index::{BruteForceIndex, NearestMetric};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn v(values: &[f32]) -> Vector {
    Vector::new(values.to_vec()).unwrap()
}

const WORDS: [&str; 8] = [
    "the", "river", "bank", "flooded", "after", "heavy", "rain", "yesterday",
];

/// A vocabulary of hash-derived unit vectors, one per word.
fn word_table(dim: usize) -> StaticVocabulary {
    let mut vocab = StaticVocabulary::new();
    for w in WORDS {
        vocab.insert(w, pseudo_embedding(w, dim).unwrap()).unwrap();
    }
    vocab
}

/// Contextual embeddings that sit close to the given vocabulary words.
fn contextual(vocab: &StaticVocabulary, positions: &[usize], noise: f32) -> Vec<Vector> {
    let jitter = pseudo_embedding("context", vocab.dimension().unwrap()).unwrap();
    positions
        .iter()
        .map(|&i| perturb(&vocab.entries()[i].vector, &jitter, noise).unwrap())
        .collect()
}

/// Lookup backend that always answers with one fixed entry.
struct Constant(Neighbor);

impl NearestNeighbor for Constant {
    fn nearest(&self, query: &Vector) -> Result<Neighbor, DecError> {
        self.0.vector.check_dimension(query)?;
        Ok(self.0.clone())
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.0.vector.dimension())
    }

    fn len(&self) -> usize {
        1
    }
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn embeddings_already_in_vocabulary_are_stable() {
    let embeddings = vec![v(&[1.0, 0.0]), v(&[0.0, 1.0])];
    let mut vocab = StaticVocabulary::new();
    vocab.insert("x", v(&[1.0, 0.0])).unwrap();
    vocab.insert("y", v(&[0.0, 1.0])).unwrap();

    let (verdict, score) = detect_drift(&embeddings, &vocab, 0.25).unwrap();
    assert_eq!(score, DriftScore::ZERO);
    assert_eq!(verdict, Verdict::Stable);
}

#[test]
fn collapsing_onto_one_word_flags_hallucination() {
    let embeddings = vec![v(&[1.0, 0.0]), v(&[0.9, 0.1])];
    let mut vocab = StaticVocabulary::new();
    vocab.insert("up", v(&[0.0, 1.0])).unwrap();

    let index = BruteForceIndex::new(&vocab);
    let mapped = map_sequence(&index, &embeddings, 64).unwrap();
    let mapped_vectors: Vec<&[f32]> = mapped.iter().map(|n| n.vector.as_slice()).collect();
    assert_eq!(mapped_vectors, vec![&[0.0f32, 1.0][..], &[0.0f32, 1.0][..]]);

    let (verdict, score) = detect_drift(&embeddings, &vocab, 0.25).unwrap();
    assert!(score.value() > 0.25, "drift was {}", score);
    assert_eq!(verdict, Verdict::PotentialHallucination);
}

#[test]
fn empty_vocabulary_is_an_error() {
    let result = detect_drift(&[v(&[0.4, 0.6])], &StaticVocabulary::new(), 0.25);
    assert_eq!(result, Err(DecError::EmptyVocabulary));
}

#[test]
fn mismatched_embedding_model_is_an_error() {
    let vocab = word_table(16);
    let embeddings = vec![pseudo_embedding("river", 32).unwrap()];
    assert_eq!(
        detect_drift(&embeddings, &vocab, 0.25),
        Err(DecError::DimensionMismatch {
            expected: 16,
            found: 32
        })
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn identity_mapping_scores_zero_under_every_policy() {
    let vocab = word_table(24);
    let embeddings: Vec<Vector> = [1, 2, 3, 6]
        .iter()
        .map(|&i| vocab.entries()[i].vector.clone())
        .collect();

    for path in [PathKind::Displacement, PathKind::Position] {
        for metric in [DriftMetric::Cosine, DriftMetric::Euclidean] {
            let config = DetectorConfig {
                path,
                metric,
                threshold: 0.0,
                ..DetectorConfig::default()
            };
            let report = DriftDetector::with_config(config)
                .unwrap()
                .detect_with_vocabulary(&embeddings, &vocab)
                .unwrap();
            assert_eq!(report.score, DriftScore::ZERO, "{} / {}", path, metric);
            assert_eq!(report.verdict, Verdict::Stable);
        }
    }
}

#[test]
fn mapping_preserves_length() {
    let vocab = word_table(32);
    for len in [1, 2, 7, 65, 130] {
        let positions: Vec<usize> = (0..len).map(|i| (i * 5) % WORDS.len()).collect();
        let embeddings = contextual(&vocab, &positions, 0.2);
        let index = BruteForceIndex::new(&vocab);
        let mapped = map_sequence(&index, &embeddings, 64).unwrap();
        assert_eq!(mapped.len(), embeddings.len());
    }
}

#[test]
fn light_noise_maps_back_to_source_words() {
    let vocab = word_table(64);
    let positions = [0, 1, 2, 3, 4, 5, 6, 7];
    let embeddings = contextual(&vocab, &positions, 0.1);

    let report = DriftDetector::new()
        .detect_with_vocabulary(&embeddings, &vocab)
        .unwrap();
    let words: Vec<&str> = report.mappings.iter().map(|m| m.word.as_str()).collect();
    assert_eq!(words, WORDS.to_vec());
}

#[test]
fn repeated_runs_are_identical() {
    let vocab = word_table(48);
    let embeddings = contextual(&vocab, &[3, 1, 4, 1, 5, 2, 6], 0.45);
    let detector = DriftDetector::new();

    let first = detector.detect_with_vocabulary(&embeddings, &vocab).unwrap();
    let second = detector.detect_with_vocabulary(&embeddings, &vocab).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parallel_lookup_does_not_change_the_report() {
    let vocab = word_table(48);
    let positions: Vec<usize> = (0..150).map(|i| (i * 3) % WORDS.len()).collect();
    let embeddings = contextual(&vocab, &positions, 0.4);

    let sequential = DriftDetector::with_config(DetectorConfig {
        parallel_threshold: usize::MAX,
        ..DetectorConfig::default()
    })
    .unwrap();
    let parallel = DriftDetector::with_config(DetectorConfig {
        parallel_threshold: 1,
        ..DetectorConfig::default()
    })
    .unwrap();

    assert_eq!(
        sequential.detect_with_vocabulary(&embeddings, &vocab).unwrap(),
        parallel.detect_with_vocabulary(&embeddings, &vocab).unwrap()
    );
}

#[test]
fn verdict_is_monotone_in_threshold() {
    let embeddings = vec![v(&[1.0, 0.0]), v(&[0.9, 0.1])];
    let mut vocab = StaticVocabulary::new();
    vocab.insert("up", v(&[0.0, 1.0])).unwrap();

    let (_, score) = detect_drift(&embeddings, &vocab, DEFAULT_THRESHOLD).unwrap();
    let mut seen_stable = false;
    for step in 0..=40 {
        let threshold = step as f64 * 0.05;
        let (verdict, s) = detect_drift(&embeddings, &vocab, threshold).unwrap();
        assert_eq!(s, score);
        if seen_stable {
            assert_eq!(verdict, Verdict::Stable, "threshold {}", threshold);
        }
        seen_stable |= verdict == Verdict::Stable;
    }
    assert!(seen_stable);
}

#[test]
fn boundary_is_strict() {
    let score = DriftScore(0.25);
    assert_eq!(gate(score, 0.25).0, Verdict::Stable);
    assert_eq!(gate(DriftScore(0.25 + 1e-12), 0.25).0, Verdict::PotentialHallucination);
}

#[test]
fn single_token_is_well_defined() {
    let vocab = word_table(16);
    let embeddings = contextual(&vocab, &[2], 0.5);
    let (verdict, score) = detect_drift(&embeddings, &vocab, 0.25).unwrap();
    // One token has no displacement, so both trajectories are empty.
    assert_eq!(score, DriftScore::ZERO);
    assert_eq!(verdict, Verdict::Stable);
}

// ---------------------------------------------------------------------------
// Pluggable backends
// ---------------------------------------------------------------------------

#[test]
fn custom_backend_drives_the_pipeline() {
    let anchor = Neighbor {
        index: 0,
        word: "anchor".to_string(),
        vector: v(&[0.0, 1.0]),
        distance: 0.0,
    };
    let backend = Constant(anchor);
    let embeddings = vec![v(&[1.0, 0.0]), v(&[0.0, 1.0]), v(&[-1.0, 0.0])];

    let report = DriftDetector::new().detect(&embeddings, &backend).unwrap();
    assert!(report.mappings.iter().all(|m| m.word == "anchor"));
    assert_eq!(report.verdict, Verdict::PotentialHallucination);
}

#[test]
fn trait_object_backend_is_accepted() {
    let vocab = word_table(16);
    let index = BruteForceIndex::with_metric(&vocab, NearestMetric::Euclidean);
    let backend: &dyn NearestNeighbor = &index;
    let embeddings = contextual(&vocab, &[0, 1, 2], 0.05);

    let report = DriftDetector::new().detect(&embeddings, backend).unwrap();
    assert_eq!(report.token_count, 3);
}

#[test]
fn report_serializes_for_downstream_tools() {
    let embeddings = vec![v(&[1.0, 0.0]), v(&[0.9, 0.1])];
    let mut vocab = StaticVocabulary::new();
    vocab.insert("up", v(&[0.0, 1.0])).unwrap();

    let report = DriftDetector::new()
        .detect_with_vocabulary(&embeddings, &vocab)
        .unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["verdict"], "potential_hallucination");
    assert_eq!(json["path"], "displacement");
    assert_eq!(json["mappings"][1]["word"], "up");
}
