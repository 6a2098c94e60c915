//! Anomaly Types
//!
//! Series input and detection output. No detection logic here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ScoringError, ScoringResult};
use crate::logic::levels::RiskLevel;

// ============================================================================
// SERIES
// ============================================================================

/// One observation in a time-ordered series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Time-ordered series. Read-only input to detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries {
    points: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    /// Build a series from values spaced `step` apart, starting at `start`.
    ///
    /// Fails when a timestamp would fall outside chrono's range.
    pub fn from_values(
        start: DateTime<Utc>,
        step: chrono::Duration,
        values: &[f64],
    ) -> ScoringResult<Self> {
        let mut points = Vec::with_capacity(values.len());
        let mut timestamp = start;
        for (i, &value) in values.iter().enumerate() {
            if i > 0 {
                timestamp = timestamp.checked_add_signed(step).ok_or_else(|| {
                    ScoringError::invalid_input(format!(
                        "timestamp of point {} overflows ({} + {} steps of {})",
                        i, start, i, step
                    ))
                })?;
            }
            points.push(SeriesPoint::new(timestamp, value));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<SeriesPoint> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = SeriesPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// DETECTION OUTPUT
// ============================================================================

/// A point above mean + k*stddev
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub level: RiskLevel,
    pub message: String,
}

/// Statistics a detection pass compared against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1)
    pub std_dev: f64,
    pub threshold: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_from_values_spaces_points() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let series = TimeSeries::from_values(start, Duration::hours(6), &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.points()[2].timestamp, start + Duration::hours(12));
        assert_eq!(series.points()[2].value, 3.0);
    }

    #[test]
    fn test_from_values_rejects_timestamp_overflow() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        // ~200k years per step; chrono tops out near year 262143
        let step = Duration::days(365 * 200_000);
        let err = TimeSeries::from_values(start, step, &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(err.is_invalid_input());

        // A single point never advances
        assert_eq!(TimeSeries::from_values(start, step, &[1.0]).unwrap().len(), 1);
    }
}
