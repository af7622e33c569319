// crates/dec-cli/src/commands/check.rs
//
// `dec check` — cross-check a model output's embeddings against a static
// vocabulary and report the verdict.

use std::process::ExitCode;

use clap::Args;
use serde::Serialize;

use dec_core::verdict::Verdict;
use dec_drift::{DetectorConfig, DriftDetector, DriftReport};

use crate::commands::args::{EmbeddingArgs, PolicyArgs, VocabArgs};
use crate::input::{load_embeddings, load_vocabulary};
use crate::output::{format_json, format_table, MappingRow, OutputFormat};

/// Exit status when drift exceeds the threshold.
const EXIT_HALLUCINATION: u8 = 2;

/// Cross-check command.
#[derive(Debug, Args)]
pub struct CheckCmd {
    #[command(flatten)]
    pub input: EmbeddingArgs,

    #[command(flatten)]
    pub vocab: VocabArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    #[serde(flatten)]
    report: &'a DriftReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a [String]>,
}

/// Run the check command.
///
/// Exits 0 for a stable trajectory and 2 for a potential hallucination.
pub fn run(cmd: &CheckCmd, config: DetectorConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = cmd.policy.apply(config);
    let detector = DriftDetector::with_config(config)?;

    let sequence = load_embeddings(&cmd.input.embeddings)?;
    let vocabulary = load_vocabulary(&cmd.vocab.vocab, cmd.vocab.vocab_format)?;
    tracing::info!(
        "Loaded {} embeddings and {} vocabulary entries",
        sequence.embeddings.len(),
        vocabulary.len()
    );

    let report = detector.detect_with_vocabulary(&sequence.embeddings, &vocabulary)?;

    match cmd.input.format {
        OutputFormat::Json => {
            let out = CheckOutput {
                report: &report,
                tokens: sequence.tokens.as_deref(),
            };
            println!("{}", format_json(&out));
        }
        OutputFormat::Table => {
            println!("Verdict:    {}", report.verdict);
            println!("Drift:      {}", report.score);
            println!("Threshold:  {}", report.threshold);
            println!("Path:       {}", report.path);
            println!("Metric:     {}", report.metric);
            println!("Tokens:     {}", report.token_count);
            println!();
            let rows: Vec<MappingRow> = report
                .mappings
                .iter()
                .map(|m| MappingRow::from_mapping(m, &sequence))
                .collect();
            println!("{}", format_table(&rows));
        }
    }

    Ok(match report.verdict {
        Verdict::Stable => ExitCode::SUCCESS,
        Verdict::PotentialHallucination => ExitCode::from(EXIT_HALLUCINATION),
    })
}
