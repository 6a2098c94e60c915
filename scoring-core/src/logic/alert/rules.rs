//! Alert Classification Rules
//!
//! Signal weights and severity cut-offs.
//! No classify logic here - only constants and config.

use serde::{Deserialize, Serialize};

use crate::error::{ScoringError, ScoringResult};

// ============================================================================
// SIGNAL POINTS
// ============================================================================

/// Description mentions a threat keyword
pub const KEYWORD_POINTS: u32 = 30;

/// More than `SYSTEMS_THRESHOLD` systems affected
pub const SYSTEMS_POINTS: u32 = 20;
pub const SYSTEMS_THRESHOLD: u32 = 10;

/// More than `USERS_THRESHOLD` users affected
pub const USERS_POINTS: u32 = 20;
pub const USERS_THRESHOLD: u32 = 100;

/// Data sensitivity flagged high
pub const SENSITIVITY_POINTS: u32 = 30;

pub const THREAT_KEYWORDS: [&str; 4] = ["breach", "intrusion", "unauthorized", "critical"];

// ============================================================================
// SEVERITY CUT-OFFS
// ============================================================================

pub const CRITICAL_MIN_SCORE: u32 = 70;
pub const HIGH_MIN_SCORE: u32 = 50;
pub const MEDIUM_MIN_SCORE: u32 = 30;

/// Upper bound of the accumulated score
pub const MAX_ALERT_SCORE: u32 = 100;

// ============================================================================
// CONFIGURABLE RULES
// ============================================================================

/// Alert rules (configurable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertRules {
    /// Matched case-insensitively as substrings
    pub threat_keywords: Vec<String>,
    pub keyword_points: u32,
    pub systems_threshold: u32,
    pub systems_points: u32,
    pub users_threshold: u32,
    pub users_points: u32,
    pub sensitivity_points: u32,
    pub critical_min: u32,
    pub high_min: u32,
    pub medium_min: u32,
}

impl Default for AlertRules {
    fn default() -> Self {
        Self {
            threat_keywords: THREAT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            keyword_points: KEYWORD_POINTS,
            systems_threshold: SYSTEMS_THRESHOLD,
            systems_points: SYSTEMS_POINTS,
            users_threshold: USERS_THRESHOLD,
            users_points: USERS_POINTS,
            sensitivity_points: SENSITIVITY_POINTS,
            critical_min: CRITICAL_MIN_SCORE,
            high_min: HIGH_MIN_SCORE,
            medium_min: MEDIUM_MIN_SCORE,
        }
    }
}

impl AlertRules {
    /// Cut-offs must be strictly descending and inside (0, 100]
    pub fn validate(&self) -> ScoringResult<()> {
        if !(self.critical_min > self.high_min && self.high_min > self.medium_min && self.medium_min > 0) {
            return Err(ScoringError::configuration(format!(
                "alert cut-offs must satisfy 100 >= critical > high > medium > 0, got {}/{}/{}",
                self.critical_min, self.high_min, self.medium_min
            )));
        }
        if self.critical_min > MAX_ALERT_SCORE {
            return Err(ScoringError::configuration(format!(
                "critical cut-off {} can never be reached (max score {})",
                self.critical_min, MAX_ALERT_SCORE
            )));
        }
        let points = [
            ("keyword_points", self.keyword_points),
            ("systems_points", self.systems_points),
            ("users_points", self.users_points),
            ("sensitivity_points", self.sensitivity_points),
        ];
        if let Some((name, value)) = points.iter().find(|(_, v)| *v > MAX_ALERT_SCORE) {
            return Err(ScoringError::configuration(format!(
                "{} is {}, a single signal may add at most {}",
                name, value, MAX_ALERT_SCORE
            )));
        }
        if self.threat_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ScoringError::configuration("threat keywords must not be blank"));
        }
        Ok(())
    }
}
