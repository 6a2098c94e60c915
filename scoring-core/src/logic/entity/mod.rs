//! Entity Module
//!
//! Per-entity risk from compliance score, incidents and audit failures,
//! classified on the unit-scale compliance table.

pub mod types;
pub mod assess;

pub use types::{BatchAssessment, EntityAssessment, EntityProfile, RejectedEntity};
pub use assess::{assess_entity, batch_assess, entity_risk};
