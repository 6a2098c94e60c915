//! Anomaly Module
//!
//! Flags statistical outliers (mean + k*stddev) in a time-ordered series.
//!
//! ## Structure
//! - `types`: `SeriesPoint`, `TimeSeries`, `Anomaly`, `SeriesStats`
//! - `detector`: `detect_anomalies`, `series_stats`

pub mod types;
pub mod detector;

pub use types::{Anomaly, SeriesPoint, SeriesStats, TimeSeries};
pub use detector::{detect_anomalies, series_stats};
