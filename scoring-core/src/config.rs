//! Configuration module
//!
//! Engine tables and tunables. Loaded from a JSON file, a JSON string or
//! the environment, and validated as a whole before an engine is built.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMPLIANT_MIN_SCORE, DEFAULT_COST_THRESHOLD_PERCENT, DEFAULT_SIGMA_MULTIPLIER,
    ENV_COMPLIANT_MIN_SCORE, ENV_CONFIG_PATH, ENV_COST_THRESHOLD_PERCENT, ENV_SIGMA_MULTIPLIER,
};
use crate::error::{ScoringError, ScoringResult};
use crate::logic::alert::AlertRules;
use crate::logic::levels::ThresholdTable;
use crate::logic::risk::WeightTable;

/// Scoring engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Metric weights for the risk score
    pub weights: WeightTable,

    /// Levels for risk scores
    pub risk_thresholds: ThresholdTable,

    /// Levels on the compliance scale (entities, standard shortfall)
    pub compliance_thresholds: ThresholdTable,

    /// k in mean + k*stddev
    pub sigma_multiplier: f64,

    /// Alert signal points and cut-offs
    pub alert_rules: AlertRules,

    /// Cost change (%) that counts as an anomaly
    pub cost_threshold_percent: f64,

    /// Minimum standard score (0-100) to be compliant
    pub compliant_min_score: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: WeightTable::reference(),
            risk_thresholds: ThresholdTable::reference_risk(),
            compliance_thresholds: ThresholdTable::reference_compliance(),
            sigma_multiplier: DEFAULT_SIGMA_MULTIPLIER,
            alert_rules: AlertRules::default(),
            cost_threshold_percent: DEFAULT_COST_THRESHOLD_PERCENT,
            compliant_min_score: DEFAULT_COMPLIANT_MIN_SCORE,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document. Missing fields take the
    /// reference defaults.
    pub fn from_json_str(json: &str) -> ScoringResult<Self> {
        let config: EngineConfig = serde_json::from_str(json).map_err(classify_parse_error)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ScoringResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!("Loaded scoring config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `.env` if present, then `SCORING_CONFIG_PATH` (falls back to
    /// the reference tables), then applies single-value overrides.
    pub fn from_env() -> ScoringResult<Self> {
        dotenvy::dotenv().ok();

        let mut config = match env::var(ENV_CONFIG_PATH) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `SCORING_*` overrides from `lookup`. Values that do not parse
    /// are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| -> Option<f64> {
            let raw = lookup(key)?;
            match raw.trim().parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!("Ignoring {}={:?}: not a number", key, raw);
                    None
                }
            }
        };

        if let Some(v) = read(ENV_SIGMA_MULTIPLIER) {
            self.sigma_multiplier = v;
        }
        if let Some(v) = read(ENV_COST_THRESHOLD_PERCENT) {
            self.cost_threshold_percent = v;
        }
        if let Some(v) = read(ENV_COMPLIANT_MIN_SCORE) {
            self.compliant_min_score = v;
        }
    }

    /// Check every tunable. Tables are already valid by construction.
    pub fn validate(&self) -> ScoringResult<()> {
        if !self.sigma_multiplier.is_finite() || self.sigma_multiplier < 0.0 {
            return Err(ScoringError::configuration(format!(
                "sigma_multiplier must be a finite value >= 0, got {}", self.sigma_multiplier
            )));
        }
        if !self.cost_threshold_percent.is_finite() || self.cost_threshold_percent < 0.0 {
            return Err(ScoringError::configuration(format!(
                "cost_threshold_percent must be a finite value >= 0, got {}", self.cost_threshold_percent
            )));
        }
        if !(0.0..=100.0).contains(&self.compliant_min_score) {
            return Err(ScoringError::configuration(format!(
                "compliant_min_score must be in [0, 100], got {}", self.compliant_min_score
            )));
        }
        self.alert_rules.validate()
    }
}

/// Semantic failures (bad tables, wrong types) are configuration errors;
/// broken JSON stays a serialization error.
fn classify_parse_error(err: serde_json::Error) -> ScoringError {
    match err.classify() {
        serde_json::error::Category::Data => ScoringError::Configuration(err.to_string()),
        _ => ScoringError::Serialization(err),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sigma_multiplier, 2.0);
        assert_eq!(config.cost_threshold_percent, 20.0);
    }

    #[test]
    fn test_empty_json_is_reference() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "sigma_multiplier": 3.0,
            "weights": [
                {"metric": "security_score", "weight": 0.6},
                {"metric": "model_accuracy", "weight": 0.4}
            ]
        }"#;
        let config = EngineConfig::from_json_str(json).unwrap();
        assert_eq!(config.sigma_multiplier, 3.0);
        assert_eq!(config.weights.entries().len(), 2);
        assert_eq!(config.risk_thresholds, ThresholdTable::reference_risk());
    }

    #[test]
    fn test_bad_weights_are_configuration_errors() {
        let json = r#"{"weights": [{"metric": "security_score", "weight": 0.5}]}"#;
        let err = EngineConfig::from_json_str(json).unwrap_err();
        assert!(err.is_configuration(), "got {}", err);
    }

    #[test]
    fn test_bad_thresholds_are_configuration_errors() {
        let json = r#"{"compliance_thresholds": {"scale": "unit", "bands": [
            {"lower_bound": 80.0, "level": "critical"},
            {"lower_bound": 0.0, "level": "minimal"}
        ]}}"#;
        assert!(EngineConfig::from_json_str(json).unwrap_err().is_configuration());
    }

    #[test]
    fn test_broken_json_is_serialization_error() {
        let err = EngineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ScoringError::Serialization(_)));
    }

    #[test]
    fn test_reject_negative_sigma() {
        let err = EngineConfig::from_json_str(r#"{"sigma_multiplier": -1.0}"#).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cost_threshold_percent": 35.0}}"#).unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.cost_threshold_percent, 35.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ScoringError::Io(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_SIGMA_MULTIPLIER, "2.5"),
            (ENV_COST_THRESHOLD_PERCENT, "abc"),
            (ENV_COMPLIANT_MIN_SCORE, " 90 "),
        ]
        .into_iter()
        .collect();

        let mut config = EngineConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.sigma_multiplier, 2.5);
        // Unparseable override ignored
        assert_eq!(config.cost_threshold_percent, DEFAULT_COST_THRESHOLD_PERCENT);
        assert_eq!(config.compliant_min_score, 90.0);
    }
}
