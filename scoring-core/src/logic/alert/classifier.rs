//! Alert Classifier
//!
//! Only classify logic - no types, no rules.
//! Input: AlertSignals + AlertRules
//! Output: AlertAssessment / Severity

use super::rules::{AlertRules, MAX_ALERT_SCORE};
use super::types::{AlertAssessment, AlertRecord, AlertSignals, DataSensitivity, Severity};

/// Accumulate signal points and map the total to a severity
pub fn assess_alert(signals: &AlertSignals, rules: &AlertRules) -> AlertAssessment {
    let mut score = 0u32;
    let mut reasons = Vec::new();

    let description = signals.description.to_lowercase();
    if let Some(keyword) = rules
        .threat_keywords
        .iter()
        .find(|kw| description.contains(kw.to_lowercase().as_str()))
    {
        score = score.saturating_add(rules.keyword_points);
        reasons.push(format!("Threat keyword '{}' in description", keyword));
    }

    if signals.affected_systems > rules.systems_threshold {
        score = score.saturating_add(rules.systems_points);
        reasons.push(format!("{} systems affected", signals.affected_systems));
    }

    if signals.affected_users > rules.users_threshold {
        score = score.saturating_add(rules.users_points);
        reasons.push(format!("{} users affected", signals.affected_users));
    }

    if signals.data_sensitivity == DataSensitivity::High {
        score = score.saturating_add(rules.sensitivity_points);
        reasons.push("High sensitivity data involved".to_string());
    }

    // Reconfigured points may exceed 100
    let score = score.min(MAX_ALERT_SCORE);
    let severity = severity_for_score(score, rules);

    reasons.push(format!("Alert score: {}", score));
    tracing::debug!(score, %severity, "classified alert");

    AlertAssessment {
        severity,
        score,
        reasons,
    }
}

/// Severity only
pub fn classify_alert_severity(signals: &AlertSignals, rules: &AlertRules) -> Severity {
    assess_alert(signals, rules).severity
}

/// Map an accumulated score to a severity
pub fn severity_for_score(score: u32, rules: &AlertRules) -> Severity {
    if score >= rules.critical_min {
        Severity::Critical
    } else if score >= rules.high_min {
        Severity::High
    } else if score >= rules.medium_min {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Most urgent first; newest first within the same severity
pub fn prioritize_alerts(alerts: &mut [AlertRecord]) {
    alerts.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| b.raised_at.cmp(&a.raised_at))
    });
}

// ============================================================================
// TESTS
// ============================================================================
