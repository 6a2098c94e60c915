//! Levels Module
//!
//! Maps numeric scores to discrete risk levels through explicit,
//! validated threshold tables.
//!
//! ## Structure
//! - `types`: `RiskLevel`, `Scale`
//! - `thresholds`: `ThresholdTable` and `classify_level`

pub mod types;
pub mod thresholds;

pub use types::{RiskLevel, Scale};
pub use thresholds::{classify_level, ThresholdBand, ThresholdTable};
