// crates/dec-cli/src/commands/vocab.rs
//
// `dec vocab` — summarize a static vocabulary file.

use clap::Args;
use serde::Serialize;

use crate::commands::args::VocabArgs;
use crate::input::load_vocabulary;
use crate::output::{format_json, OutputFormat};

/// Vocabulary summary command.
#[derive(Debug, Args)]
pub struct VocabCmd {
    #[command(flatten)]
    pub vocab: VocabArgs,

    /// Number of leading words to list.
    #[arg(long, default_value = "10")]
    pub show: usize,

    /// Output format: table or json.
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct VocabSummary<'a> {
    entries: usize,
    dimension: Option<usize>,
    sample: Vec<&'a str>,
}

/// Run the vocab command.
pub fn run(cmd: &VocabCmd) -> Result<(), Box<dyn std::error::Error>> {
    let vocabulary = load_vocabulary(&cmd.vocab.vocab, cmd.vocab.vocab_format)?;
    let summary = VocabSummary {
        entries: vocabulary.len(),
        dimension: vocabulary.dimension(),
        sample: vocabulary
            .entries()
            .iter()
            .take(cmd.show)
            .map(|e| e.word.as_str())
            .collect(),
    };

    match cmd.format {
        OutputFormat::Json => println!("{}", format_json(&summary)),
        OutputFormat::Table => {
            println!("Vocabulary: {}", cmd.vocab.vocab);
            println!("  Entries:   {}", summary.entries);
            match summary.dimension {
                Some(d) => println!("  Dimension: {}", d),
                None => println!("  Dimension: - (empty)"),
            }
            if !summary.sample.is_empty() {
                println!("  First {}:   {}", summary.sample.len(), summary.sample.join(", "));
            }
        }
    }

    Ok(())
}
