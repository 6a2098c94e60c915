//! Compliance Status
//!
//! Per-standard status and violation ordering.

use super::types::{ComplianceStandard, ComplianceState, StandardStatus, Violation};
use crate::error::{ensure_finite, ScoringError, ScoringResult};
use crate::logic::levels::{classify_level, ThresholdTable};
use crate::logic::risk::RiskScore;

/// Status of one standard from its 0-100 score.
///
/// Compliant when `score >= compliant_min`. The shortfall `100 - score`
/// is classified with `thresholds`, normally the unit-scale compliance table.
pub fn assess_standard(
    standard: ComplianceStandard,
    score: f64,
    open_violations: u32,
    compliant_min: f64,
    thresholds: &ThresholdTable,
) -> ScoringResult<StandardStatus> {
    let score = ensure_finite("compliance score", score)?;
    if !(0.0..=100.0).contains(&score) {
        return Err(ScoringError::invalid_input(format!(
            "{} compliance score {} is outside [0, 100]", standard, score
        )));
    }

    let state = if score >= compliant_min {
        ComplianceState::Compliant
    } else {
        ComplianceState::AtRisk
    };
    let shortfall_level = classify_level(RiskScore::new(100.0 - score)?, thresholds);

    tracing::debug!(%standard, score, state = state.as_str(), %shortfall_level, "assessed standard");

    Ok(StandardStatus {
        standard,
        score,
        state,
        shortfall_level,
        open_violations,
    })
}

/// Most severe first. Stable, so equal severities keep detection order.
pub fn sort_violations(violations: &mut [Violation]) {
    violations.sort_by_key(|v| v.severity);
}
