//! Entity Assessment
//!
//! Risk for a single entity = mean of the factors it reports:
//! - `1 - compliance_score`
//! - `incident_count / 10`, capped at 1
//! - `audit_failures / 5`, capped at 1
//!
//! Computed on the unit scale, returned on the canonical percent scale.

use super::types::{BatchAssessment, EntityAssessment, EntityProfile, RejectedEntity};
use crate::error::{ensure_finite, ScoringError, ScoringResult};
use crate::logic::levels::{classify_level, Scale, ThresholdTable};
use crate::logic::risk::RiskScore;

/// Incident count at which the incident factor saturates
pub const INCIDENT_SATURATION: f64 = 10.0;

/// Audit failures at which the audit factor saturates
pub const AUDIT_FAILURE_SATURATION: f64 = 5.0;

const UNKNOWN_ENTITY: &str = "UNKNOWN";

/// Unit-scale risk (0.0 - 1.0). No factors -> 0.
pub fn entity_risk(profile: &EntityProfile) -> ScoringResult<f64> {
    let mut factors = Vec::with_capacity(3);

    if let Some(compliance) = profile.compliance_score {
        let compliance = ensure_finite("compliance_score", compliance)?;
        if !(0.0..=1.0).contains(&compliance) {
            return Err(ScoringError::invalid_input(format!(
                "compliance_score {} is outside [0, 1]", compliance
            )));
        }
        factors.push(1.0 - compliance);
    }
    if let Some(incidents) = profile.incident_count {
        factors.push((incidents as f64 / INCIDENT_SATURATION).min(1.0));
    }
    if let Some(failures) = profile.audit_failures {
        factors.push((failures as f64 / AUDIT_FAILURE_SATURATION).min(1.0));
    }

    if factors.is_empty() {
        return Ok(0.0);
    }
    Ok(factors.iter().sum::<f64>() / factors.len() as f64)
}

pub fn assess_entity(profile: &EntityProfile, thresholds: &ThresholdTable) -> ScoringResult<EntityAssessment> {
    let risk_score = RiskScore::clamped(Scale::Unit.to_percent(entity_risk(profile)?));
    let risk_level = classify_level(risk_score, thresholds);

    let entity_id = if profile.entity_id.is_empty() {
        UNKNOWN_ENTITY.to_string()
    } else {
        profile.entity_id.clone()
    };
    tracing::debug!(entity = %entity_id, score = risk_score.value(), level = %risk_level, "assessed entity");

    Ok(EntityAssessment {
        entity_id,
        risk_score,
        risk_level,
        compliance_score: profile.compliance_score,
        incident_count: profile.incident_count,
        audit_failures: profile.audit_failures,
    })
}

/// Assess every profile; failures are collected, not fatal
pub fn batch_assess(profiles: &[EntityProfile], thresholds: &ThresholdTable) -> BatchAssessment {
    let mut batch = BatchAssessment::default();

    for profile in profiles {
        match assess_entity(profile, thresholds) {
            Ok(assessment) => batch.assessments.push(assessment),
            Err(e) => {
                tracing::warn!(entity = %profile.entity_id, error = %e, "skipping entity in batch assessment");
                batch.rejected.push(RejectedEntity {
                    entity_id: profile.entity_id.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::levels::RiskLevel;

    fn table() -> ThresholdTable {
        ThresholdTable::reference_compliance()
    }

    #[test]
    fn test_no_factors_is_zero_risk() {
        let result = assess_entity(&EntityProfile::new("ENT-00001"), &table()).unwrap();
        assert_eq!(result.risk_score.value(), 0.0);
        assert_eq!(result.risk_level, RiskLevel::Minimal);
    }

    #[test]
    fn test_factors_are_averaged() {
        let profile = EntityProfile::new("ENT-00002")
            .with_compliance(0.2)
            .with_incidents(10)
            .with_audit_failures(5);
        // (0.8 + 1.0 + 1.0) / 3
        let risk = entity_risk(&profile).unwrap();
        assert!((risk - 2.8 / 3.0).abs() < 1e-9);

        let result = assess_entity(&profile, &table()).unwrap();
        assert!((result.risk_score.value() - 280.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_counts_saturate() {
        let profile = EntityProfile::new("ENT-00003").with_incidents(40).with_audit_failures(50);
        assert_eq!(entity_risk(&profile).unwrap(), 1.0);
        let result = assess_entity(&profile, &table()).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn test_missing_id_is_unknown() {
        let result = assess_entity(&EntityProfile::default(), &table()).unwrap();
        assert_eq!(result.entity_id, "UNKNOWN");
    }

    #[test]
    fn test_reject_compliance_on_percent_scale() {
        let profile = EntityProfile::new("ENT-00004").with_compliance(85.0);
        assert!(assess_entity(&profile, &table()).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_batch_keeps_going() {
        let profiles = vec![
            EntityProfile::new("ENT-1").with_compliance(0.9),
            EntityProfile::new("ENT-2").with_compliance(f64::NAN),
            EntityProfile::new("ENT-3").with_incidents(3),
        ];
        let batch = batch_assess(&profiles, &table());

        assert_eq!(batch.assessments.len(), 2);
        assert_eq!(batch.assessments[0].entity_id, "ENT-1");
        assert_eq!(batch.assessments[1].entity_id, "ENT-3");
        assert_eq!(batch.rejected.len(), 1);
        assert_eq!(batch.rejected[0].entity_id, "ENT-2");
        assert!(batch.rejected[0].reason.contains("finite"));
    }
}
