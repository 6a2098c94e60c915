//! Entity Types

use serde::{Deserialize, Serialize};

use crate::logic::levels::RiskLevel;
use crate::logic::risk::RiskScore;

/// Audit facts about one monitored entity. Every factor is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityProfile {
    pub entity_id: String,
    /// 0.0 - 1.0
    pub compliance_score: Option<f64>,
    pub incident_count: Option<u32>,
    pub audit_failures: Option<u32>,
}

impl EntityProfile {
    pub fn new(entity_id: &str) -> Self {
        Self {
            entity_id: entity_id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_compliance(mut self, score: f64) -> Self {
        self.compliance_score = Some(score);
        self
    }

    pub fn with_incidents(mut self, count: u32) -> Self {
        self.incident_count = Some(count);
        self
    }

    pub fn with_audit_failures(mut self, count: u32) -> Self {
        self.audit_failures = Some(count);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityAssessment {
    pub entity_id: String,
    /// Canonical 0-100 scale
    pub risk_score: RiskScore,
    pub risk_level: RiskLevel,
    pub compliance_score: Option<f64>,
    pub incident_count: Option<u32>,
    pub audit_failures: Option<u32>,
}

/// An entity `batch_assess` could not score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedEntity {
    pub entity_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchAssessment {
    pub assessments: Vec<EntityAssessment>,
    pub rejected: Vec<RejectedEntity>,
}
