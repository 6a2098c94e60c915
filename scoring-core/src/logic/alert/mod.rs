//! Alert Module
//!
//! Classifies security alert severity from additive signal points.
//!
//! ## Structure
//! - `types`: `Severity`, `AlertSignals`, `AlertAssessment`, `AlertRecord`
//! - `rules`: Points, cut-offs and `AlertRules`
//! - `classifier`: Classification and ordering logic

pub mod types;
pub mod rules;
pub mod classifier;

pub use types::{AlertAssessment, AlertRecord, AlertSignals, DataSensitivity, Severity};
pub use rules::AlertRules;
pub use classifier::{assess_alert, classify_alert_severity, prioritize_alerts, severity_for_score};
