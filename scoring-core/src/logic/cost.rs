//! Cost Anomaly Check
//!
//! Compares current spend against a baseline and flags moves beyond
//! a percentage threshold.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ScoringError, ScoringResult};
use crate::logic::alert::Severity;

/// |change| above this is high severity
pub const HIGH_CHANGE_PERCENT: f64 = 50.0;

/// |change| above this is medium severity
pub const MEDIUM_CHANGE_PERCENT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostAnomaly {
    pub is_anomaly: bool,
    pub current_cost: f64,
    pub baseline_cost: f64,
    /// Signed, rounded to 2 decimals
    pub percent_change: f64,
    pub severity: Severity,
}

/// Flag `current` when it moves more than `threshold_percent` away from
/// `baseline`, in either direction.
pub fn detect_cost_anomaly(current: f64, baseline: f64, threshold_percent: f64) -> ScoringResult<CostAnomaly> {
    let current = ensure_finite("current cost", current)?;
    let baseline = ensure_finite("baseline cost", baseline)?;
    let threshold_percent = ensure_finite("cost threshold", threshold_percent)?;

    if baseline <= 0.0 {
        return Err(ScoringError::invalid_input(format!(
            "baseline cost must be positive, got {}", baseline
        )));
    }
    if current < 0.0 {
        return Err(ScoringError::invalid_input(format!(
            "current cost must not be negative, got {}", current
        )));
    }
    if threshold_percent < 0.0 {
        return Err(ScoringError::invalid_input(format!(
            "cost threshold must not be negative, got {}", threshold_percent
        )));
    }

    let change = (current - baseline) / baseline * 100.0;
    if !change.is_finite() {
        return Err(ScoringError::invalid_input(format!(
            "cost change of {} against baseline {} is out of range", current, baseline
        )));
    }
    let magnitude = change.abs();

    let severity = if magnitude > HIGH_CHANGE_PERCENT {
        Severity::High
    } else if magnitude > MEDIUM_CHANGE_PERCENT {
        Severity::Medium
    } else {
        Severity::Low
    };

    let result = CostAnomaly {
        is_anomaly: magnitude > threshold_percent,
        current_cost: current,
        baseline_cost: baseline,
        percent_change: (change * 100.0).round() / 100.0,
        severity,
    };

    if result.is_anomaly {
        tracing::debug!(current, baseline, change = result.percent_change, %severity, "cost anomaly");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_threshold() {
        let result = detect_cost_anomaly(1100.0, 1000.0, 20.0).unwrap();
        assert!(!result.is_anomaly);
        assert_eq!(result.percent_change, 10.0);
        assert_eq!(result.severity, Severity::Low);
    }

    #[test]
    fn test_increase_severity_bands() {
        let medium = detect_cost_anomaly(1400.0, 1000.0, 20.0).unwrap();
        assert!(medium.is_anomaly);
        assert_eq!(medium.severity, Severity::Medium);

        let high = detect_cost_anomaly(1600.0, 1000.0, 20.0).unwrap();
        assert_eq!(high.severity, Severity::High);

        let low = detect_cost_anomaly(1250.0, 1000.0, 20.0).unwrap();
        assert!(low.is_anomaly);
        assert_eq!(low.severity, Severity::Low);
    }

    #[test]
    fn test_drop_is_also_anomalous() {
        let result = detect_cost_anomaly(400.0, 1000.0, 20.0).unwrap();
        assert!(result.is_anomaly);
        assert_eq!(result.percent_change, -60.0);
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn test_rounding() {
        let result = detect_cost_anomaly(1000.0, 3000.0, 20.0).unwrap();
        assert_eq!(result.percent_change, -66.67);
    }

    #[test]
    fn test_reject_zero_baseline() {
        assert!(detect_cost_anomaly(10.0, 0.0, 20.0).unwrap_err().is_invalid_input());
        assert!(detect_cost_anomaly(10.0, -5.0, 20.0).unwrap_err().is_invalid_input());
        assert!(detect_cost_anomaly(f64::NAN, 10.0, 20.0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_reject_change_outside_f64() {
        let err = detect_cost_anomaly(1e308, 1e-300, 20.0).unwrap_err();
        assert!(err.is_invalid_input());
        // Large but representable change still works
        let result = detect_cost_anomaly(1e6, 1e-3, 20.0).unwrap();
        assert!(result.is_anomaly);
        assert_eq!(result.severity, Severity::High);
    }
}
