//! Level Types
//!
//! Discrete risk buckets and the numeric scales they are defined on.
//! No classification logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Risk level buckets, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Minimal,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
        RiskLevel::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Minimal => "minimal",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCALE
// ============================================================================

/// Numeric domain a threshold table is written in.
///
/// Scores are carried on the percent scale everywhere; a `Unit` table
/// receives them divided by 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// 0 - 100
    Percent,
    /// 0.0 - 1.0
    Unit,
}

impl Scale {
    pub fn max(&self) -> f64 {
        match self {
            Scale::Percent => 100.0,
            Scale::Unit => 1.0,
        }
    }

    /// Convert a percent-scale value into this scale
    pub fn from_percent(&self, value: f64) -> f64 {
        match self {
            Scale::Percent => value,
            Scale::Unit => value / 100.0,
        }
    }

    /// Convert a value on this scale to the percent scale
    pub fn to_percent(&self, value: f64) -> f64 {
        match self {
            Scale::Percent => value,
            Scale::Unit => value * 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Percent => "percent",
            Scale::Unit => "unit",
        }
    }
}
