//! Risk Module
//!
//! Turns weighted quality metrics into a bounded risk score.
//!
//! ## Structure
//! - `types`: `MetricSet`, `RiskScore`, `RiskAssessment`
//! - `weights`: `WeightTable` and the reference weights
//! - `scorer`: `compute_risk_score`
//!
//! ## Usage
//! ```ignore
//! use crate::logic::risk::{compute_risk_score, MetricSet, WeightTable};
//!
//! let metrics = MetricSet::new().with("security_score", 72.0);
//! let score = compute_risk_score(&metrics, &WeightTable::reference())?;
//! ```

pub mod types;
pub mod weights;
pub mod scorer;

pub use types::{MetricSet, RiskAssessment, RiskScore};
pub use weights::{MetricWeight, WeightTable};
pub use scorer::compute_risk_score;
