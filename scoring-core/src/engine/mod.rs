//! Scoring Engine
//!
//! Validated, immutable facade over the `logic` functions. Build one per
//! configuration; it is `Send + Sync` and needs no locking.
//!
//! # Failure Strategy
//! Malformed tables fail in `ScoringEngine::new`, before any request is
//! served. Per-call failures are scoped to that call.

pub mod shared;

use crate::config::EngineConfig;
use crate::error::ScoringResult;
use crate::logic::alert::{self, AlertAssessment, AlertSignals, Severity};
use crate::logic::anomaly::{self, Anomaly, SeriesStats, TimeSeries};
use crate::logic::compliance::{self, ComplianceStandard, StandardStatus};
use crate::logic::cost::{self, CostAnomaly};
use crate::logic::entity::{self, BatchAssessment, EntityAssessment, EntityProfile};
use crate::logic::levels::{self, RiskLevel};
use crate::logic::risk::{self, MetricSet, RiskAssessment, RiskScore};

pub use shared::SharedEngine;

#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: EngineConfig,
}

impl ScoringEngine {
    pub fn new(config: EngineConfig) -> ScoringResult<Self> {
        config.validate()?;
        tracing::info!(
            metrics = config.weights.entries().len(),
            risk_scale = config.risk_thresholds.scale().as_str(),
            compliance_scale = config.compliance_thresholds.scale().as_str(),
            sigma = config.sigma_multiplier,
            "Scoring engine ready"
        );
        Ok(Self { config })
    }

    /// Engine with the reference tables
    pub fn reference() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Risk
    // ------------------------------------------------------------------------

    pub fn risk_score(&self, metrics: &MetricSet) -> ScoringResult<RiskScore> {
        risk::compute_risk_score(metrics, &self.config.weights)
    }

    /// Level on the risk table
    pub fn classify_level(&self, score: RiskScore) -> RiskLevel {
        levels::classify_level(score, &self.config.risk_thresholds)
    }

    /// Level on the compliance table; the score is converted to its scale
    pub fn classify_compliance_level(&self, score: RiskScore) -> RiskLevel {
        levels::classify_level(score, &self.config.compliance_thresholds)
    }

    pub fn assess_risk(&self, metrics: &MetricSet) -> ScoringResult<RiskAssessment> {
        let score = self.risk_score(metrics)?;
        Ok(RiskAssessment {
            score,
            level: self.classify_level(score),
        })
    }

    // ------------------------------------------------------------------------
    // Anomalies
    // ------------------------------------------------------------------------

    /// Detect with the configured sigma multiplier
    pub fn detect_anomalies(&self, series: &TimeSeries) -> ScoringResult<Vec<Anomaly>> {
        self.detect_anomalies_with_sigma(series, self.config.sigma_multiplier)
    }

    pub fn detect_anomalies_with_sigma(&self, series: &TimeSeries, sigma_multiplier: f64) -> ScoringResult<Vec<Anomaly>> {
        anomaly::detect_anomalies(series, sigma_multiplier, &self.config.risk_thresholds)
    }

    pub fn series_stats(&self, series: &TimeSeries) -> ScoringResult<Option<SeriesStats>> {
        anomaly::series_stats(series, self.config.sigma_multiplier)
    }

    // ------------------------------------------------------------------------
    // Alerts
    // ------------------------------------------------------------------------

    pub fn assess_alert(&self, signals: &AlertSignals) -> AlertAssessment {
        alert::assess_alert(signals, &self.config.alert_rules)
    }

    pub fn classify_alert_severity(&self, signals: &AlertSignals) -> Severity {
        alert::classify_alert_severity(signals, &self.config.alert_rules)
    }

    // ------------------------------------------------------------------------
    // Compliance & entities
    // ------------------------------------------------------------------------

    pub fn assess_standard(
        &self,
        standard: ComplianceStandard,
        score: f64,
        open_violations: u32,
    ) -> ScoringResult<StandardStatus> {
        compliance::assess_standard(
            standard,
            score,
            open_violations,
            self.config.compliant_min_score,
            &self.config.compliance_thresholds,
        )
    }

    pub fn assess_entity(&self, profile: &EntityProfile) -> ScoringResult<EntityAssessment> {
        entity::assess_entity(profile, &self.config.compliance_thresholds)
    }

    pub fn batch_assess(&self, profiles: &[EntityProfile]) -> BatchAssessment {
        entity::batch_assess(profiles, &self.config.compliance_thresholds)
    }

    // ------------------------------------------------------------------------
    // Cost
    // ------------------------------------------------------------------------

    pub fn detect_cost_anomaly(&self, current: f64, baseline: f64) -> ScoringResult<CostAnomaly> {
        cost::detect_cost_anomaly(current, baseline, self.config.cost_threshold_percent)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::reference()
    }
}
