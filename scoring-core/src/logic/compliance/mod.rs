//! Compliance Module
//!
//! Standard status and violation ordering on top of the compliance scale.

pub mod types;
pub mod status;

pub use types::{ComplianceStandard, ComplianceState, StandardStatus, Violation};
pub use status::{assess_standard, sort_violations};
