// crates/dec-cli/src/output.rs
//
// Output formatting utilities for the `dec` CLI.
// Supports table and JSON output modes.

use std::str::FromStr;

use serde::Serialize;
use tabled::{Table, Tabled};

use dec_core::vocabulary::Neighbor;
use dec_drift::TokenMapping;

use crate::input::TokenSequence;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    #[default]
    Table,
    /// JSON output for machine consumption.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// One row of the per-token mapping table.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct MappingRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "Token")]
    pub token: String,
    #[tabled(rename = "Nearest word")]
    pub word: String,
    #[tabled(rename = "Distance", display_with = "fmt_distance")]
    pub distance: f64,
}

fn fmt_distance(d: &f64) -> String {
    format!("{:.4}", d)
}

impl MappingRow {
    pub fn from_mapping(m: &TokenMapping, sequence: &TokenSequence) -> Self {
        Self {
            position: m.position,
            token: sequence.label(m.position),
            word: m.word.clone(),
            distance: m.distance,
        }
    }

    pub fn from_neighbor(position: usize, n: &Neighbor, sequence: &TokenSequence) -> Self {
        Self {
            position,
            token: sequence.label(position),
            word: n.word.clone(),
            distance: n.distance,
        }
    }
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> MappingRow {
        MappingRow {
            position: 0,
            token: "bank".to_string(),
            word: "river".to_string(),
            distance: 0.123456,
        }
    }

    #[test]
    fn table_has_headers_and_rounded_distance() {
        let table = format_table(&[row()]);
        assert!(table.contains("Nearest word"));
        assert!(table.contains("river"));
        assert!(table.contains("0.1235"));
    }

    #[test]
    fn json_keeps_field_names() {
        let json = format_json(&vec![row()]);
        assert!(json.contains("\"word\": \"river\""));
    }

    #[test]
    fn output_format_parses() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
