//! Compliance Types

use serde::{Deserialize, Serialize};

use crate::logic::alert::Severity;
use crate::logic::levels::RiskLevel;

/// Standards tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStandard {
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "SOC 2")]
    Soc2,
    #[serde(rename = "ISO 27001")]
    Iso27001,
    #[serde(rename = "HIPAA")]
    Hipaa,
    #[serde(rename = "PCI DSS")]
    PciDss,
    #[serde(rename = "CCPA")]
    Ccpa,
}

impl ComplianceStandard {
    pub const ALL: [ComplianceStandard; 6] = [
        ComplianceStandard::Gdpr,
        ComplianceStandard::Soc2,
        ComplianceStandard::Iso27001,
        ComplianceStandard::Hipaa,
        ComplianceStandard::PciDss,
        ComplianceStandard::Ccpa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStandard::Gdpr => "GDPR",
            ComplianceStandard::Soc2 => "SOC 2",
            ComplianceStandard::Iso27001 => "ISO 27001",
            ComplianceStandard::Hipaa => "HIPAA",
            ComplianceStandard::PciDss => "PCI DSS",
            ComplianceStandard::Ccpa => "CCPA",
        }
    }
}

impl std::fmt::Display for ComplianceStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceState {
    Compliant,
    AtRisk,
}

impl ComplianceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceState::Compliant => "compliant",
            ComplianceState::AtRisk => "at_risk",
        }
    }
}

/// Status of a single standard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardStatus {
    pub standard: ComplianceStandard,
    /// 0 - 100
    pub score: f64,
    pub state: ComplianceState,
    /// Level of the gap to full compliance, classified on the compliance scale
    pub shortfall_level: RiskLevel,
    pub open_violations: u32,
}

/// A failed compliance check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub id: String,
    pub standard: ComplianceStandard,
    pub category: String,
    pub severity: Severity,
    pub description: String,
}
