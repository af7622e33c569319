// crates/dec-cli/src/input.rs
//
// Reading embedding sequences and vocabularies from disk.

use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::str::FromStr;

use serde::Deserialize;

use dec_core::error::DecError;
use dec_core::vector::Vector;
use dec_core::vocabulary::StaticVocabulary;

/// On-disk vocabulary format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VocabFormat {
    /// `.json` files are JSON, anything else is word2vec/GloVe text.
    #[default]
    Auto,
    Text,
    Json,
}

impl FromStr for VocabFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(VocabFormat::Auto),
            "text" | "glove" | "word2vec" => Ok(VocabFormat::Text),
            "json" => Ok(VocabFormat::Json),
            other => Err(format!("unknown vocabulary format '{}'", other)),
        }
    }
}

impl fmt::Display for VocabFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabFormat::Auto => write!(f, "auto"),
            VocabFormat::Text => write!(f, "text"),
            VocabFormat::Json => write!(f, "json"),
        }
    }
}

/// Load a vocabulary file.
pub fn load_vocabulary(path: &str, format: VocabFormat) -> Result<StaticVocabulary, DecError> {
    let format = match format {
        VocabFormat::Auto if path.ends_with(".json") => VocabFormat::Json,
        VocabFormat::Auto => VocabFormat::Text,
        explicit => explicit,
    };
    match format {
        VocabFormat::Json => StaticVocabulary::from_json(&fs::read_to_string(path)?),
        _ => StaticVocabulary::from_text(BufReader::new(File::open(path)?)),
    }
}

/// Embedding file layouts: a bare array, or vectors labelled with tokens.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EmbeddingFile {
    Bare(Vec<Vector>),
    Labelled {
        #[serde(default)]
        tokens: Option<Vec<String>>,
        embeddings: Vec<Vector>,
    },
}

/// A model output's token embeddings, optionally with the token strings.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSequence {
    pub tokens: Option<Vec<String>>,
    pub embeddings: Vec<Vector>,
}

impl TokenSequence {
    /// Display label for the token at `position`.
    pub fn label(&self, position: usize) -> String {
        self.tokens
            .as_ref()
            .and_then(|t| t.get(position).cloned())
            .unwrap_or_else(|| format!("#{}", position))
    }
}

pub fn parse_embeddings(json: &str) -> Result<TokenSequence, DecError> {
    let sequence = match serde_json::from_str::<EmbeddingFile>(json)? {
        EmbeddingFile::Bare(embeddings) => TokenSequence {
            tokens: None,
            embeddings,
        },
        EmbeddingFile::Labelled { tokens, embeddings } => TokenSequence { tokens, embeddings },
    };

    if let Some(tokens) = &sequence.tokens {
        if tokens.len() != sequence.embeddings.len() {
            return Err(DecError::Parse(format!(
                "{} tokens but {} embeddings",
                tokens.len(),
                sequence.embeddings.len()
            )));
        }
    }
    Ok(sequence)
}

pub fn load_embeddings(path: &str) -> Result<TokenSequence, DecError> {
    parse_embeddings(&fs::read_to_string(path)?)
}
