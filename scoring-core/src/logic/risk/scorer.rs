//! Risk Scorer
//!
//! Only the scoring math - no types, no thresholds.
//! Input: MetricSet + WeightTable
//! Output: RiskScore

use super::types::{MetricSet, RiskScore};
use super::weights::WeightTable;
use crate::constants::NEUTRAL_METRIC_VALUE;
use crate::error::{ensure_finite, ScoringError, ScoringResult};

/// Weighted risk score: sum of `(100 - value) * weight` over the weight table.
///
/// Missing metrics count as 50. Metrics outside [0, 100] are rejected
/// instead of clamped; the result itself is clamped to [0, 100].
pub fn compute_risk_score(metrics: &MetricSet, weights: &WeightTable) -> ScoringResult<RiskScore> {
    let mut total = 0.0f64;

    for entry in weights.entries() {
        let value = metrics.get(&entry.metric).unwrap_or(NEUTRAL_METRIC_VALUE);
        let value = ensure_finite(&entry.metric, value)?;
        if !(0.0..=100.0).contains(&value) {
            return Err(ScoringError::invalid_input(format!(
                "metric '{}' is {}, expected a value in [0, 100]",
                entry.metric, value
            )));
        }

        // Quality -> risk
        total += (100.0 - value) * entry.weight;
    }

    let score = RiskScore::clamped(total);
    tracing::debug!(score = score.value(), metrics = metrics.len(), "computed risk score");
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::risk::MetricWeight;

    fn all_metrics(value: f64) -> MetricSet {
        WeightTable::reference()
            .entries()
            .iter()
            .map(|e| (e.metric.clone(), value))
            .collect()
    }

    #[test]
    fn test_all_zero_is_max_risk() {
        let score = compute_risk_score(&all_metrics(0.0), &WeightTable::reference()).unwrap();
        assert!((score.value() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_hundred_is_no_risk() {
        let score = compute_risk_score(&all_metrics(100.0), &WeightTable::reference()).unwrap();
        assert_eq!(score.value(), 0.0);
    }

    #[test]
    fn test_empty_metrics_is_neutral() {
        let score = compute_risk_score(&MetricSet::new(), &WeightTable::reference()).unwrap();
        assert!((score.value() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_sum() {
        // 25% security only, the rest neutral:
        // (100 - 20) * 0.25 + 50 * 0.75 = 20 + 37.5
        let metrics = MetricSet::new().with("security_score", 20.0);
        let score = compute_risk_score(&metrics, &WeightTable::reference()).unwrap();
        assert!((score.value() - 57.5).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let base = compute_risk_score(&MetricSet::new(), &WeightTable::reference()).unwrap();
        let noisy = MetricSet::new().with("latency_ms", 9000.0).with("colour", -4.0);
        let score = compute_risk_score(&noisy, &WeightTable::reference()).unwrap();
        assert_eq!(base, score);
    }

    #[test]
    fn test_reject_out_of_range_metric() {
        let metrics = MetricSet::new().with("model_accuracy", 120.0);
        let err = compute_risk_score(&metrics, &WeightTable::reference()).unwrap_err();
        assert!(err.is_invalid_input());

        let metrics = MetricSet::new().with("data_quality", -1.0);
        assert!(compute_risk_score(&metrics, &WeightTable::reference()).is_err());
    }

    #[test]
    fn test_reject_nan_metric() {
        let metrics = MetricSet::new().with("drift_score", f64::NAN);
        let err = compute_risk_score(&metrics, &WeightTable::reference()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_custom_table() {
        let weights = WeightTable::new(vec![
            MetricWeight::new("uptime", 0.5),
            MetricWeight::new("patch_level", 0.5),
        ])
        .unwrap();
        let metrics = MetricSet::new().with("uptime", 90.0).with("patch_level", 70.0);
        let score = compute_risk_score(&metrics, &weights).unwrap();
        assert!((score.value() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let metrics = MetricSet::new()
            .with("model_accuracy", 91.3)
            .with("security_score", 47.25)
            .with("drift_score", 12.0);
        let a = compute_risk_score(&metrics, &WeightTable::reference()).unwrap();
        let b = compute_risk_score(&metrics, &WeightTable::reference()).unwrap();
        assert_eq!(a.value().to_bits(), b.value().to_bits());
    }
}
