// crates/dec-cli/src/main.rs
//
// CLI entrypoint for Dual Embedding Cross-Check.
//
// Loads the TOML configuration, initializes tracing, and dispatches to the
// `check`, `map`, and `vocab` subcommands.

mod commands;
mod config;
mod input;
mod output;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use commands::check::CheckCmd;
use commands::map::MapCmd;
use commands::vocab::VocabCmd;
use config::CliConfig;

/// Dual Embedding Cross-Check: flag model outputs whose embedding
/// trajectory drifts away from static word meanings.
#[derive(Parser, Debug)]
#[command(name = "dec", version, about = "Dual Embedding Cross-Check hallucination detector")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "~/.dec/config.toml")]
    config: String,

    /// Log level override: trace, debug, info, warn, error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Cross-check token embeddings against a static vocabulary.
    Check(CheckCmd),

    /// Show each token's nearest static word.
    Map(MapCmd),

    /// Summarize a static vocabulary file.
    Vocab(VocabCmd),
}

/// Exit status for a command-line parse failure.
///
/// Help and version requests succeed. Every other parse failure is a plain
/// error (1), never 2, which `check` reserves for a flagged trajectory.
fn parse_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Build the log filter from a level name or a full directive string.
fn log_filter(level: &str) -> Result<EnvFilter, String> {
    if level.contains('=') {
        return EnvFilter::try_new(level)
            .map_err(|e| format!("invalid log filter '{}': {}", level, e));
    }
    level
        .parse::<LevelFilter>()
        .map(|l| EnvFilter::default().add_directive(l.into()))
        .map_err(|_| format!("unknown log level '{}'", level))
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_code(e.kind()));
        }
    };

    let (config, loaded) = match CliConfig::load_or_default(&cli.config) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("error: invalid config {}: {}", cli.config, e);
            return ExitCode::FAILURE;
        }
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = match log_filter(level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or(filter))
        .init();

    if loaded {
        tracing::info!("Loaded configuration from {}", cli.config);
    } else {
        tracing::debug!("No config at {}. Using defaults.", cli.config);
    }

    let result = match &cli.command {
        Commands::Check(cmd) => commands::check::run(cmd, config.detector),
        Commands::Map(cmd) => commands::map::run(cmd, &config.detector).map(|_| ExitCode::SUCCESS),
        Commands::Vocab(cmd) => commands::vocab::run(cmd).map(|_| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
