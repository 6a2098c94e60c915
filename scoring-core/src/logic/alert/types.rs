//! Alert Types
//!
//! Core types for alert severity classification.
//! No logic here - only data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// SEVERITY
// ============================================================================

/// Alert / violation urgency. Declared most urgent first, so the derived
/// ordering sorts critical to the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SIGNALS (caller input)
// ============================================================================

/// How sensitive the data touched by an alert is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSensitivity {
    #[default]
    Low,
    Medium,
    High,
}

/// Independent signals that feed the severity score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertSignals {
    /// Free text searched for threat keywords
    pub description: String,
    pub affected_systems: u32,
    pub affected_users: u32,
    pub data_sensitivity: DataSensitivity,
}

impl AlertSignals {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            ..Default::default()
        }
    }

    pub fn with_affected_systems(mut self, count: u32) -> Self {
        self.affected_systems = count;
        self
    }

    pub fn with_affected_users(mut self, count: u32) -> Self {
        self.affected_users = count;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: DataSensitivity) -> Self {
        self.data_sensitivity = sensitivity;
        self
    }
}

// ============================================================================
// RESULT
// ============================================================================

/// Result of alert classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertAssessment {
    pub severity: Severity,
    /// Accumulated score, 0 - 100
    pub score: u32,
    pub reasons: Vec<String>,
}

// ============================================================================
// ALERT RECORD
// ============================================================================

/// An already-classified alert, as handed back for display ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub raised_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_wire_form_is_plain_label() {
        for severity in [Severity::Critical, Severity::High, Severity::Medium, Severity::Low] {
            let json = serde_json::to_string(&severity).unwrap();
            assert_eq!(json, format!("\"{}\"", severity.as_str()));
        }
    }

    #[test]
    fn test_severity_orders_critical_first() {
        let mut all = vec![Severity::Low, Severity::Critical, Severity::Medium, Severity::High];
        all.sort();
        assert_eq!(all, vec![Severity::Critical, Severity::High, Severity::Medium, Severity::Low]);
    }
}
