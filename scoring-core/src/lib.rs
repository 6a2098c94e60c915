//! AI Risk & Compliance - Scoring Engine
//!
//! Deterministic scoring core behind the risk & compliance dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      SCORING ENGINE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  EngineConfig ──validate──▶ ScoringEngine ◀── SharedEngine    │
//! │                               │              (atomic swap)   │
//! │       ┌───────────┬──────────┼───────────┬───────────┐      │
//! │       ▼           ▼          ▼           ▼           ▼      │
//! │     risk       levels     anomaly      alert    compliance  │
//! │  (weighted)  (thresholds) (mean+kσ)   (points)   / entity   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All operations are pure and synchronous. Tables are validated once in
//! `ScoringEngine::new` and never mutated afterwards.
//!
//! ## Usage
//! ```ignore
//! use risk_scoring_core::{MetricSet, ScoringEngine};
//!
//! let engine = ScoringEngine::reference();
//! let metrics = MetricSet::new().with("security_score", 42.0);
//! let assessment = engine.assess_risk(&metrics)?;
//! println!("{} ({})", assessment.score, assessment.level);
//! ```

pub mod constants;
pub mod error;
pub mod config;
pub mod logic;
pub mod engine;

pub use config::EngineConfig;
pub use engine::{ScoringEngine, SharedEngine};
pub use error::{ScoringError, ScoringResult};

pub use logic::alert::{AlertAssessment, AlertRecord, AlertRules, AlertSignals, DataSensitivity, Severity};
pub use logic::anomaly::{Anomaly, SeriesPoint, SeriesStats, TimeSeries};
pub use logic::compliance::{ComplianceStandard, ComplianceState, StandardStatus, Violation};
pub use logic::cost::CostAnomaly;
pub use logic::entity::{BatchAssessment, EntityAssessment, EntityProfile};
pub use logic::levels::{RiskLevel, Scale, ThresholdBand, ThresholdTable};
pub use logic::risk::{MetricSet, MetricWeight, RiskAssessment, RiskScore, WeightTable};
