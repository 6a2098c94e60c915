//! Threshold Tables
//!
//! Ordered (lower-bound, level) bands and the score -> level mapping.
//! Tables are validated once when built and are immutable afterwards.

use serde::{Deserialize, Serialize};

use super::types::{RiskLevel, Scale};
use crate::constants::{REFERENCE_COMPLIANCE_BOUNDS, REFERENCE_RISK_BOUNDS};
use crate::error::{ScoringError, ScoringResult};
use crate::logic::risk::RiskScore;

// ============================================================================
// TYPES
// ============================================================================

/// A single band: scores >= `lower_bound` belong to `level`
/// unless a higher band already matched
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub lower_bound: f64,
    pub level: RiskLevel,
}

impl ThresholdBand {
    pub fn new(lower_bound: f64, level: RiskLevel) -> Self {
        Self { lower_bound, level }
    }
}

#[derive(Debug, Deserialize)]
struct RawThresholdTable {
    scale: Scale,
    bands: Vec<ThresholdBand>,
}

/// Exhaustive, strictly descending threshold table on an explicit scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholdTable")]
pub struct ThresholdTable {
    scale: Scale,
    bands: Vec<ThresholdBand>,
}

impl TryFrom<RawThresholdTable> for ThresholdTable {
    type Error = ScoringError;

    fn try_from(raw: RawThresholdTable) -> Result<Self, Self::Error> {
        ThresholdTable::new(raw.scale, raw.bands)
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl ThresholdTable {
    /// Build a table, rejecting gaps, overlaps and out-of-range bounds.
    ///
    /// Bands must be strictly descending, lie inside `[0, scale.max()]`,
    /// and the last band must start at 0 so every score in the domain
    /// lands in exactly one band.
    pub fn new(scale: Scale, bands: Vec<ThresholdBand>) -> ScoringResult<Self> {
        if bands.is_empty() {
            return Err(ScoringError::configuration("threshold table is empty"));
        }

        let max = scale.max();
        for (i, band) in bands.iter().enumerate() {
            if !band.lower_bound.is_finite() || band.lower_bound < 0.0 || band.lower_bound > max {
                return Err(ScoringError::configuration(format!(
                    "threshold for '{}' is {}, outside the {} range [0, {}]",
                    band.level, band.lower_bound, scale.as_str(), max
                )));
            }
            if i > 0 && band.lower_bound >= bands[i - 1].lower_bound {
                return Err(ScoringError::configuration(format!(
                    "thresholds must be strictly descending: '{}' ({}) follows '{}' ({})",
                    band.level, band.lower_bound, bands[i - 1].level, bands[i - 1].lower_bound
                )));
            }
            if bands[..i].iter().any(|b| b.level == band.level) {
                return Err(ScoringError::configuration(format!(
                    "level '{}' appears more than once", band.level
                )));
            }
        }

        // Non-empty was checked above
        let floor = bands[bands.len() - 1].lower_bound;
        if floor != 0.0 {
            return Err(ScoringError::configuration(format!(
                "lowest threshold is {}, scores in [0, {}) would have no level",
                floor, floor
            )));
        }

        Ok(Self { scale, bands })
    }

    /// Risk scale: critical >= 80, high >= 60, medium >= 40, low >= 20, minimal below
    pub fn reference_risk() -> Self {
        Self {
            scale: Scale::Percent,
            bands: reference_bands(&REFERENCE_RISK_BOUNDS),
        }
    }

    /// Compliance scale: critical >= 0.95, high >= 0.80, medium >= 0.60, low >= 0.30
    pub fn reference_compliance() -> Self {
        Self {
            scale: Scale::Unit,
            bands: reference_bands(&REFERENCE_COMPLIANCE_BOUNDS),
        }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn bands(&self) -> &[ThresholdBand] {
        &self.bands
    }

    /// Classify a value already expressed in this table's scale.
    ///
    /// Values below the domain fall into the lowest band.
    pub fn level_for(&self, value: f64) -> RiskLevel {
        self.bands
            .iter()
            .find(|band| value >= band.lower_bound)
            .or_else(|| self.bands.last())
            .map(|band| band.level)
            .unwrap_or(RiskLevel::Minimal)
    }
}

fn reference_bands(bounds: &[f64; 5]) -> Vec<ThresholdBand> {
    bounds
        .iter()
        .zip(RiskLevel::ALL)
        .map(|(&bound, level)| ThresholdBand::new(bound, level))
        .collect()
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Map a canonical (percent) score to a level using `thresholds`.
///
/// The score is converted into the table's scale first, so a unit-scale
/// table never sees a 0-100 value.
pub fn classify_level(score: RiskScore, thresholds: &ThresholdTable) -> RiskLevel {
    let value = thresholds.scale.from_percent(score.value());
    let level = thresholds.level_for(value);
    tracing::debug!(score = score.value(), scale = thresholds.scale.as_str(), %level, "classified score");
    level
}

// ============================================================================
// TESTS
// ============================================================================
