// crates/dec-cli/src/config.rs
//
// Runtime configuration for the `dec` CLI.
// Loaded from a TOML file or populated with defaults; command-line flags
// override file values.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use dec_drift::DetectorConfig;

/// Contents of the CLI's TOML configuration file.
///
/// ```toml
/// log_level = "info"
///
/// [detector]
/// threshold = 0.3
/// path = "displacement"
/// metric = "cosine"
/// nearest = "cosine"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pipeline policy.
    #[serde(default)]
    pub detector: DetectorConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            detector: DetectorConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(expand_tilde(path))?;
        Self::parse(&contents)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    ///
    /// The flag reports whether a file was read. A file that exists but does
    /// not parse is still an error.
    pub fn load_or_default(path: &str) -> Result<(Self, bool), Box<dyn std::error::Error>> {
        if !Path::new(&expand_tilde(path)).exists() {
            return Ok((Self::default(), false));
        }
        Ok((Self::load(path)?, true))
    }

    pub fn parse(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: CliConfig = toml::from_str(contents)?;
        config.detector.validate()?;
        Ok(config)
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dec_drift::{DriftMetric, PathKind};
    use dec_index::NearestMetric;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = CliConfig::parse("").unwrap();
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.detector, DetectorConfig::default());
    }

    #[test]
    fn detector_table_overrides_policy() {
        let cfg = CliConfig::parse(
            r#"
            log_level = "debug"

            [detector]
            threshold = 0.4
            path = "position"
            metric = "euclidean"
            nearest = "euclidean"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.detector.threshold, 0.4);
        assert_eq!(cfg.detector.path, PathKind::Position);
        assert_eq!(cfg.detector.metric, DriftMetric::Euclidean);
        assert_eq!(cfg.detector.nearest, NearestMetric::Euclidean);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        assert!(CliConfig::parse("[detector]\nthreshold = -0.1\n").is_err());
    }

    #[test]
    fn unknown_metric_is_rejected() {
        assert!(CliConfig::parse("[detector]\nmetric = \"manhattan\"\n").is_err());
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(CliConfig::load("/nonexistent/dec/config.toml").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let (cfg, loaded) = CliConfig::load_or_default("/nonexistent/dec/config.toml").unwrap();
        assert!(!loaded);
        assert_eq!(cfg.detector, DetectorConfig::default());
    }

    #[test]
    fn existing_but_invalid_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("dec_config_{}.toml", std::process::id()));
        fs::write(&path, "[detector]\nthreshold = \"high\"\n").unwrap();
        let result = CliConfig::load_or_default(path.to_str().unwrap());
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn tilde_only_expands_prefix() {
        assert_eq!(expand_tilde("/etc/dec.toml"), "/etc/dec.toml");
        assert_eq!(expand_tilde("a~/b"), "a~/b");
    }
}
