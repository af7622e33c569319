// crates/dec-drift/src/gate.rs
//
// Decision gate: threshold a drift score into a verdict.

use dec_core::error::DecError;
use dec_core::verdict::{DriftScore, Verdict};

/// Drift above which a trajectory is flagged.
pub const DEFAULT_THRESHOLD: f64 = 0.25;

/// Reject negative and non-finite thresholds.
pub fn validate_threshold(threshold: f64) -> Result<f64, DecError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(DecError::InvalidThreshold(threshold));
    }
    Ok(threshold)
}

/// Flag `PotentialHallucination` iff `score > threshold`.
///
/// A score exactly at the threshold is `Stable`.
pub fn gate(score: DriftScore, threshold: f64) -> (Verdict, DriftScore) {
    let verdict = if score.value() > threshold {
        Verdict::PotentialHallucination
    } else {
        Verdict::Stable
    };
    (verdict, score)
}
