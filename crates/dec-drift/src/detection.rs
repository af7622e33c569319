// crates/dec-drift/src/detection.rs
//
// Trajectory drift detection between contextual embeddings and their
// nearest static word vectors.
//
// The pipeline runs strictly forward: map each embedding to its nearest
// vocabulary vector, compose a path from each sequence, score the distance
// between the two paths, and gate the score against the threshold.

use serde::Serialize;
use tracing::{debug, info, instrument};

use dec_core::error::DecError;
use dec_core::traits::NearestNeighbor;
use dec_core::vector::Vector;
use dec_core::verdict::{DriftScore, Verdict};
use dec_core::vocabulary::StaticVocabulary;
use dec_index::BruteForceIndex;

use crate::config::DetectorConfig;
use crate::gate::{gate, validate_threshold};
use crate::mapper::map_sequence;
use crate::path::PathKind;
use crate::scorer::DriftMetric;

/// Where one token's embedding landed in the static vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMapping {
    /// Token position in the input sequence.
    pub position: usize,
    /// Nearest vocabulary word.
    pub word: String,
    /// Lookup distance under the configured nearest metric.
    pub distance: f64,
}

/// Outcome of one cross-check, with enough detail to explain the verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftReport {
    pub verdict: Verdict,
    pub score: DriftScore,
    pub threshold: f64,
    pub token_count: usize,
    pub path: PathKind,
    pub metric: DriftMetric,
    pub mappings: Vec<TokenMapping>,
}

impl DriftReport {
    /// The `(Verdict, DriftScore)` pair the gate produced.
    pub fn outcome(&self) -> (Verdict, DriftScore) {
        (self.verdict, self.score)
    }
}

/// Cross-checks embedding trajectories against a static vocabulary.
#[derive(Debug, Clone, Default)]
pub struct DriftDetector {
    config: DetectorConfig,
}

impl DriftDetector {
    /// Create a DriftDetector with default policy (threshold 0.25).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a DriftDetector from an explicit configuration.
    ///
    /// Fails if the configured threshold is negative or not finite.
    pub fn with_config(config: DetectorConfig) -> Result<Self, DecError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run the full pipeline against any nearest-neighbour backend.
    #[instrument(skip_all, fields(tokens = embeddings.len(), vocabulary = index.len()))]
    pub fn detect<N>(&self, embeddings: &[Vector], index: &N) -> Result<DriftReport, DecError>
    where
        N: NearestNeighbor + ?Sized,
    {
        let threshold = validate_threshold(self.config.threshold)?;

        let neighbors = map_sequence(index, embeddings, self.config.parallel_threshold)?;
        let mapped: Vec<Vector> = neighbors.iter().map(|n| n.vector.clone()).collect();

        let composer = self.config.path.composer();
        let contextual_path = composer.compose(embeddings)?;
        let static_path = composer.compose(&mapped)?;
        debug!(
            steps = contextual_path.step_count(),
            dimension = contextual_path.dimension(),
            path = %self.config.path,
            "composed trajectories"
        );

        let score = self
            .config
            .metric
            .scorer()
            .score(&contextual_path, &static_path)?;
        let (verdict, score) = gate(score, threshold);

        info!(%verdict, score = score.value(), threshold, "cross-check complete");

        Ok(DriftReport {
            verdict,
            score,
            threshold,
            token_count: embeddings.len(),
            path: self.config.path,
            metric: self.config.metric,
            mappings: neighbors
                .into_iter()
                .enumerate()
                .map(|(position, n)| TokenMapping {
                    position,
                    word: n.word,
                    distance: n.distance,
                })
                .collect(),
        })
    }

    /// Run the pipeline with an exact index over `vocabulary`.
    pub fn detect_with_vocabulary(
        &self,
        embeddings: &[Vector],
        vocabulary: &StaticVocabulary,
    ) -> Result<DriftReport, DecError> {
        let index = BruteForceIndex::with_metric(vocabulary, self.config.nearest);
        self.detect(embeddings, &index)
    }
}

/// Cross-check `embeddings` against `vocabulary` with the default policy.
///
/// Cosine nearest-vector lookup, displacement paths, and cosine drift.
/// Returns the verdict and the raw drift score.
pub fn detect_drift(
    embeddings: &[Vector],
    vocabulary: &StaticVocabulary,
    threshold: f64,
) -> Result<(Verdict, DriftScore), DecError> {
    let config = DetectorConfig::default().with_threshold(threshold);
    let report = DriftDetector::with_config(config)?.detect_with_vocabulary(embeddings, vocabulary)?;
    Ok(report.outcome())
}
