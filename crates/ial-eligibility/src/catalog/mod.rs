//! Built-in unit and qualification catalog.
//!
//! The catalog is static data; nothing here is mutated at runtime.

mod qualifications;
mod units;

pub use qualifications::{qualification_views, AwardLevel, Qualification, QualificationView};
pub use units::{
    is_known, lookup, units, units_in_group, Unit, UnitGroup, APPLIED_UNITS, FURTHER_PURE_UNITS,
    PURE_UNITS, VALID_APPLIED_PAIRS,
};

use serde::Serialize;

/// Catalog section as presented to unit pickers.
#[derive(Debug, Clone, Serialize)]
pub struct UnitSection {
    pub group: UnitGroup,
    pub title: &'static str,
    pub units: Vec<Unit>,
}

pub fn grouped_units() -> Vec<UnitSection> {
    UnitGroup::ALL
        .into_iter()
        .map(|group| UnitSection {
            group,
            title: group.label(),
            units: units_in_group(group).copied().collect(),
        })
        .collect()
}
