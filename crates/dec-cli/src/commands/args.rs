// crates/dec-cli/src/commands/args.rs
//
// Argument groups shared by several subcommands.

use clap::Args;

use dec_drift::{DetectorConfig, DriftMetric, PathKind};
use dec_index::NearestMetric;

use crate::input::VocabFormat;
use crate::output::OutputFormat;

/// Where to read the static vocabulary from.
#[derive(Debug, Args)]
pub struct VocabArgs {
    /// Static word-vector file (word2vec/GloVe text or JSON).
    #[arg(long)]
    pub vocab: String,

    /// Vocabulary file format: auto, text, json.
    #[arg(long, default_value = "auto")]
    pub vocab_format: VocabFormat,
}

/// Model output to cross-check.
#[derive(Debug, Args)]
pub struct EmbeddingArgs {
    /// JSON file with the token embeddings.
    #[arg(long)]
    pub embeddings: String,

    /// Output format: table or json.
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

/// Per-run overrides of the configured detector policy.
#[derive(Debug, Args)]
pub struct PolicyArgs {
    /// Drift above this value is flagged (default 0.25).
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Trajectory representation: displacement or position.
    #[arg(long)]
    pub path: Option<PathKind>,

    /// Drift metric between trajectories: cosine or euclidean.
    #[arg(long)]
    pub metric: Option<DriftMetric>,

    /// Nearest-vector lookup metric: cosine or euclidean.
    #[arg(long)]
    pub nearest: Option<NearestMetric>,
}

impl PolicyArgs {
    /// Apply flags on top of the file configuration.
    pub fn apply(&self, mut config: DetectorConfig) -> DetectorConfig {
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(path) = self.path {
            config.path = path;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }
        if let Some(nearest) = self.nearest {
            config.nearest = nearest;
        }
        config
    }
}
