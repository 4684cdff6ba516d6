//! Eligibility engine for IAL Mathematics qualifications.
//!
//! Given the units a student has taken, [`eligibility::evaluate`] reports the
//! award they can cash in, or what is still missing. The remaining modules
//! carry the catalog data and the plumbing used by the API service.

pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod roster;
pub mod telemetry;
