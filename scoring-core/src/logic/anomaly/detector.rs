//! Anomaly Detector
//!
//! Static (whole-series) z-score filter. Mean and stddev are computed
//! once per call and every point is compared against the same bound.

use super::types::{Anomaly, SeriesStats, TimeSeries};
use crate::error::{ensure_finite, ScoringError, ScoringResult};
use crate::logic::levels::ThresholdTable;

/// Mean, sample stddev and `mean + sigma * stddev` for a series.
///
/// Returns `None` for series shorter than 2 points; there is no sample
/// deviation to compare against.
pub fn series_stats(series: &TimeSeries, sigma_multiplier: f64) -> ScoringResult<Option<SeriesStats>> {
    validate_sigma(sigma_multiplier)?;
    for point in series.points() {
        ensure_finite("series value", point.value)?;
    }

    let count = series.len();
    if count < 2 {
        return Ok(None);
    }

    let n = count as f64;
    let mean = series.points().iter().map(|p| p.value).sum::<f64>() / n;
    let variance = series
        .points()
        .iter()
        .map(|p| (p.value - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    let std_dev = variance.sqrt();
    let threshold = mean + sigma_multiplier * std_dev;

    if !(mean.is_finite() && std_dev.is_finite() && threshold.is_finite()) {
        return Err(ScoringError::invalid_input(format!(
            "series statistics overflow f64 (mean {}, stddev {})",
            mean, std_dev
        )));
    }

    Ok(Some(SeriesStats {
        count,
        mean,
        std_dev,
        threshold,
    }))
}

/// Flag every point strictly above `mean + sigma_multiplier * stddev`.
///
/// Output keeps input order. Fewer than 2 points, or a flat series
/// (stddev 0), yields no anomalies. Each anomaly is levelled with
/// `thresholds`, reading point values on the percent scale.
pub fn detect_anomalies(
    series: &TimeSeries,
    sigma_multiplier: f64,
    thresholds: &ThresholdTable,
) -> ScoringResult<Vec<Anomaly>> {
    let stats = match series_stats(series, sigma_multiplier)? {
        Some(stats) if stats.std_dev > 0.0 => stats,
        _ => return Ok(Vec::new()),
    };

    let anomalies: Vec<Anomaly> = series
        .points()
        .iter()
        .filter(|p| p.value > stats.threshold)
        .map(|p| Anomaly {
            timestamp: p.timestamp,
            value: p.value,
            level: thresholds.level_for(thresholds.scale().from_percent(p.value)),
            message: format!("Risk spike detected: {:.1}", p.value),
        })
        .collect();

    tracing::debug!(
        points = stats.count,
        mean = stats.mean,
        std_dev = stats.std_dev,
        threshold = stats.threshold,
        anomalies = anomalies.len(),
        "anomaly scan complete"
    );

    Ok(anomalies)
}

fn validate_sigma(sigma_multiplier: f64) -> ScoringResult<()> {
    let sigma = ensure_finite("sigma multiplier", sigma_multiplier)?;
    if sigma < 0.0 {
        return Err(ScoringError::invalid_input(format!(
            "sigma multiplier must be >= 0, got {}", sigma
        )));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
