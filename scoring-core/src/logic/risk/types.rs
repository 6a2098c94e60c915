//! Risk Types
//!
//! Core types for risk scoring.
//! No scoring logic here - only data structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ScoringError, ScoringResult};
use crate::logic::levels::RiskLevel;

// ============================================================================
// METRIC SET (caller input)
// ============================================================================

/// Named quality metrics, each expected in [0, 100].
///
/// Keys not present in the weight table are ignored when scoring;
/// weighted keys that are missing count as neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSet {
    values: HashMap<String, f64>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, metric: &str, value: f64) -> Self {
        self.insert(metric, value);
        self
    }

    pub fn insert(&mut self, metric: &str, value: f64) {
        self.values.insert(metric.to_string(), value);
    }

    pub fn get(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for MetricSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// RISK SCORE
// ============================================================================

/// Risk score on the canonical 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RiskScore(f64);

impl RiskScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Strict constructor: rejects values outside [0, 100]
    pub fn new(value: f64) -> ScoringResult<Self> {
        let value = ensure_finite("risk score", value)?;
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ScoringError::invalid_input(format!(
                "risk score {} is outside [0, 100]", value
            )));
        }
        Ok(Self(value))
    }

    /// Clamp into [0, 100]. NaN collapses to 0.
    pub(crate) fn clamped(value: f64) -> Self {
        Self(value.max(Self::MIN).min(Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for RiskScore {
    type Error = ScoringError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        RiskScore::new(value)
    }
}

impl From<RiskScore> for f64 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

// ============================================================================
// RISK ASSESSMENT
// ============================================================================

/// Score always paired with the level it classifies to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: RiskScore,
    pub level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_score_bounds() {
        assert!(RiskScore::new(0.0).is_ok());
        assert!(RiskScore::new(100.0).is_ok());
        assert!(RiskScore::new(100.01).unwrap_err().is_invalid_input());
        assert!(RiskScore::new(-0.5).unwrap_err().is_invalid_input());
        assert!(RiskScore::new(f64::NAN).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(RiskScore::clamped(120.0).value(), 100.0);
        assert_eq!(RiskScore::clamped(-3.0).value(), 0.0);
        assert_eq!(RiskScore::clamped(f64::NAN).value(), 0.0);
    }

    #[test]
    fn test_metric_set_from_iter() {
        let metrics: MetricSet = [("security_score", 70.0), ("drift_score", 10.0)]
            .into_iter()
            .collect();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics.get("security_score"), Some(70.0));
        assert_eq!(metrics.get("model_accuracy"), None);
    }

    #[test]
    fn test_risk_score_rejects_bad_json() {
        assert!(serde_json::from_str::<RiskScore>("42.5").is_ok());
        assert!(serde_json::from_str::<RiskScore>("142.5").is_err());
    }
}
