// crates/dec-cli/src/commands/map.rs
//
// `dec map` — show the nearest static word for every token embedding.

use clap::Args;

use dec_drift::{map_sequence, DetectorConfig};
use dec_index::{BruteForceIndex, NearestMetric};

use crate::commands::args::{EmbeddingArgs, VocabArgs};
use crate::input::{load_embeddings, load_vocabulary};
use crate::output::{format_json, format_table, MappingRow, OutputFormat};

/// Nearest-word mapping command.
#[derive(Debug, Args)]
pub struct MapCmd {
    #[command(flatten)]
    pub input: EmbeddingArgs,

    #[command(flatten)]
    pub vocab: VocabArgs,

    /// Nearest-vector lookup metric: cosine or euclidean.
    #[arg(long)]
    pub nearest: Option<NearestMetric>,
}

/// Run the map command.
pub fn run(cmd: &MapCmd, config: &DetectorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let sequence = load_embeddings(&cmd.input.embeddings)?;
    let vocabulary = load_vocabulary(&cmd.vocab.vocab, cmd.vocab.vocab_format)?;

    let metric = cmd.nearest.unwrap_or(config.nearest);
    let index = BruteForceIndex::with_metric(&vocabulary, metric);
    let neighbors = map_sequence(&index, &sequence.embeddings, config.parallel_threshold)?;

    let rows: Vec<MappingRow> = neighbors
        .iter()
        .enumerate()
        .map(|(i, n)| MappingRow::from_neighbor(i, n, &sequence))
        .collect();

    match cmd.input.format {
        OutputFormat::Json => println!("{}", format_json(&rows)),
        OutputFormat::Table => {
            println!("Nearest static words ({} metric)", metric);
            println!();
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
