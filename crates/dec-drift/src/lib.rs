// crates/dec-drift/src/lib.rs
//
// dec-drift: Trajectory drift scoring and hallucination verdicts for
// Dual Embedding Cross-Check.
//
// This crate composes the four pipeline stages: nearest-vector mapping,
// path composition, drift scoring, and the threshold gate. `detect_drift`
// is the one-call entry point; `DriftDetector` exposes the configurable
// pipeline and a detailed report.

pub mod config;
pub mod detection;
pub mod gate;
pub mod mapper;
pub mod path;
pub mod scorer;

pub use config::DetectorConfig;
pub use detection::{detect_drift, DriftDetector, DriftReport, TokenMapping};
pub use gate::{gate, validate_threshold, DEFAULT_THRESHOLD};
pub use mapper::{map_sequence, DEFAULT_PARALLEL_THRESHOLD};
pub use path::{DisplacementPath, PathKind, PositionPath};
pub use scorer::{CosineDrift, DriftMetric, EuclideanDrift};
