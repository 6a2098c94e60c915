//! Central Configuration Constants
//!
//! Single source of truth for the reference tables and environment keys.
//! To change a default, only edit this file.

/// Value assumed for a weighted metric that the caller did not supply
pub const NEUTRAL_METRIC_VALUE: f64 = 50.0;

/// Allowed drift of the weight sum away from 1.0
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Default multiplier k for the mean + k*stddev anomaly bound
pub const DEFAULT_SIGMA_MULTIPLIER: f64 = 2.0;

/// Alert if cost moves by more than this percentage from baseline
pub const DEFAULT_COST_THRESHOLD_PERCENT: f64 = 20.0;

/// Minimum standard score (0-100) to be reported as compliant
pub const DEFAULT_COMPLIANT_MIN_SCORE: f64 = 80.0;

/// Reference weight table: (metric, weight)
pub const REFERENCE_WEIGHTS: [(&str, f64); 6] = [
    ("model_accuracy", 0.20),
    ("data_quality", 0.15),
    ("security_score", 0.25),
    ("compliance_score", 0.20),
    ("performance_score", 0.10),
    ("drift_score", 0.10),
];

/// Reference risk thresholds, percent scale, descending
pub const REFERENCE_RISK_BOUNDS: [f64; 5] = [80.0, 60.0, 40.0, 20.0, 0.0];

/// Reference compliance thresholds, unit scale, descending
pub const REFERENCE_COMPLIANCE_BOUNDS: [f64; 5] = [0.95, 0.80, 0.60, 0.30, 0.0];

// ============================================
// Environment keys
// ============================================

pub const ENV_CONFIG_PATH: &str = "SCORING_CONFIG_PATH";
pub const ENV_SIGMA_MULTIPLIER: &str = "SCORING_SIGMA_MULTIPLIER";
pub const ENV_COST_THRESHOLD_PERCENT: &str = "SCORING_COST_THRESHOLD_PERCENT";
pub const ENV_COMPLIANT_MIN_SCORE: &str = "SCORING_COMPLIANT_MIN_SCORE";
