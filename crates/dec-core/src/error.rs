use thiserror::Error;

/// Error types shared by every stage of the cross-check pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecError {
    /// Nearest-vector lookup attempted against a vocabulary with no entries.
    #[error("Empty vocabulary: nearest-vector lookup needs at least one entry")]
    EmptyVocabulary,

    /// Two vectors or paths that must agree in shape do not.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The embedding sequence has no elements.
    #[error("Empty sequence: a trajectory needs at least one embedding")]
    EmptySequence,

    /// A vector failed validation (zero dimension, NaN, infinity).
    #[error("Invalid vector: {0}")]
    InvalidVector(String),

    /// Threshold is negative or not a finite number.
    #[error("Invalid threshold: {0} (must be finite and non-negative)")]
    InvalidThreshold(f64),

    /// Malformed vocabulary or embedding text.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Filesystem error while reading inputs.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DecError {
    fn from(e: serde_json::Error) -> Self {
        DecError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for DecError {
    fn from(e: std::io::Error) -> Self {
        DecError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_message_names_both_sides() {
        let err = DecError::DimensionMismatch {
            expected: 300,
            found: 768,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 300, found 768");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: DecError = io.into();
        assert!(matches!(err, DecError::Io(msg) if msg.contains("missing.txt")));
    }
}
