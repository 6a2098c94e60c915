//! Risk Weights
//!
//! Weight table for the risk score. Validated once at construction;
//! scoring never re-checks it.

use serde::{Deserialize, Serialize};

use crate::constants::{REFERENCE_WEIGHTS, WEIGHT_SUM_EPSILON};
use crate::error::{ScoringError, ScoringResult};

/// How much one metric contributes to the final score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricWeight {
    pub metric: String,
    pub weight: f64,
}

impl MetricWeight {
    pub fn new(metric: &str, weight: f64) -> Self {
        Self {
            metric: metric.to_string(),
            weight,
        }
    }
}

/// Ordered weight table. Positive weights summing to 1.0.
///
/// Entry order is kept so the summation order (and the result bits)
/// never depends on hashing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MetricWeight>", into = "Vec<MetricWeight>")]
pub struct WeightTable {
    entries: Vec<MetricWeight>,
}

impl WeightTable {
    pub fn new(entries: Vec<MetricWeight>) -> ScoringResult<Self> {
        if entries.is_empty() {
            return Err(ScoringError::configuration("weight table is empty"));
        }

        for (i, entry) in entries.iter().enumerate() {
            if entry.metric.trim().is_empty() {
                return Err(ScoringError::configuration("weight table contains an unnamed metric"));
            }
            if !entry.weight.is_finite() || entry.weight <= 0.0 {
                return Err(ScoringError::configuration(format!(
                    "weight for '{}' must be positive, got {}", entry.metric, entry.weight
                )));
            }
            if entries[..i].iter().any(|e| e.metric == entry.metric) {
                return Err(ScoringError::configuration(format!(
                    "metric '{}' is weighted more than once", entry.metric
                )));
            }
        }

        let sum: f64 = entries.iter().map(|e| e.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ScoringError::configuration(format!(
                "weights must sum to 1.0, got {:.6}", sum
            )));
        }

        Ok(Self { entries })
    }

    /// model_accuracy 20%, data_quality 15%, security_score 25%,
    /// compliance_score 20%, performance_score 10%, drift_score 10%
    pub fn reference() -> Self {
        Self {
            entries: REFERENCE_WEIGHTS
                .iter()
                .map(|&(metric, weight)| MetricWeight::new(metric, weight))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[MetricWeight] {
        &self.entries
    }

    pub fn weight_of(&self, metric: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.metric == metric).map(|e| e.weight)
    }
}

impl TryFrom<Vec<MetricWeight>> for WeightTable {
    type Error = ScoringError;

    fn try_from(entries: Vec<MetricWeight>) -> Result<Self, Self::Error> {
        WeightTable::new(entries)
    }
}

impl From<WeightTable> for Vec<MetricWeight> {
    fn from(table: WeightTable) -> Self {
        table.entries
    }
}
