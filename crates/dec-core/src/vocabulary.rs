// crates/dec-core/src/vocabulary.rs
//
// Static word-vector vocabulary and its on-disk formats.
//
// A vocabulary is an ordered list of (word, vector) entries sharing one
// dimension. Order is significant: nearest-neighbour ties resolve to the
// entry inserted first, so loading the same file twice yields identical
// lookups.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::DecError;
use crate::vector::Vector;

/// One word and its static vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub vector: Vector,
}

/// Result of a nearest-vector lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    /// Position of the entry in the vocabulary.
    pub index: usize,
    pub word: String,
    pub vector: Vector,
    /// Distance from the query under the lookup metric.
    pub distance: f64,
}

/// Immutable-after-load set of static word vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticVocabulary {
    entries: Vec<VocabEntry>,
}

impl StaticVocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a vocabulary from entries, enforcing a single dimension.
    pub fn from_entries(entries: Vec<VocabEntry>) -> Result<Self, DecError> {
        let mut vocab = Self::new();
        for entry in entries {
            vocab.insert(entry.word, entry.vector)?;
        }
        Ok(vocab)
    }

    /// Append an entry. The first entry fixes the vocabulary's dimension.
    pub fn insert(&mut self, word: impl Into<String>, vector: Vector) -> Result<(), DecError> {
        if let Some(first) = self.entries.first() {
            first.vector.check_dimension(&vector)?;
        }
        self.entries.push(VocabEntry {
            word: word.into(),
            vector,
        });
        Ok(())
    }

    /// Dimension shared by all entries, `None` while empty.
    pub fn dimension(&self) -> Option<usize> {
        self.entries.first().map(|e| e.vector.dimension())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&VocabEntry> {
        self.entries.get(index)
    }

    /// Parse the word2vec / GloVe text format.
    ///
    /// Each line is `word v1 v2 ... vd`. Blank lines are skipped, and so is a
    /// `count dim` header (as written by word2vec) on the first non-blank line.
    pub fn from_text<R: BufRead>(reader: R) -> Result<Self, DecError> {
        let mut vocab = Self::new();
        let mut seen_content = false;

        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let rest: Vec<&str> = fields.collect();

            let first_content = !seen_content;
            seen_content = true;
            if first_content && is_word2vec_header(word, &rest) {
                continue;
            }

            let values = rest
                .iter()
                .map(|f| f.parse::<f32>())
                .collect::<Result<Vec<f32>, _>>()
                .map_err(|e| DecError::Parse(format!("line {}: {}", lineno + 1, e)))?;
            let vector = Vector::new(values)
                .map_err(|e| DecError::Parse(format!("line {}: {}", lineno + 1, e)))?;
            vocab.insert(word, vector).map_err(|e| match e {
                DecError::DimensionMismatch { .. } => {
                    DecError::Parse(format!("line {}: {}", lineno + 1, e))
                }
                other => other,
            })?;
        }

        Ok(vocab)
    }

    /// Parse a JSON array of `{"word": ..., "vector": [...]}` objects.
    pub fn from_json(json: &str) -> Result<Self, DecError> {
        let entries: Vec<VocabEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }
}

fn is_word2vec_header(first: &str, rest: &[&str]) -> bool {
    rest.len() == 1 && first.parse::<u64>().is_ok() && rest[0].parse::<u64>().is_ok()
}
