//! Logic Module - Scoring & Classification
//!
//! Pure, stateless functions over explicit inputs and validated tables.
//!
//! - `levels/` - Threshold tables and score -> level mapping
//! - `risk/` - Weighted risk score
//! - `anomaly/` - Mean + k*stddev outlier detection
//! - `alert/` - Alert severity from signal points
//! - `compliance/` - Per-standard status, violation ordering
//! - `entity/` - Entity risk from audit facts
//! - `cost` - Cost change vs baseline

pub mod levels;
pub mod risk;
pub mod anomaly;
pub mod alert;
pub mod compliance;
pub mod entity;
pub mod cost;
