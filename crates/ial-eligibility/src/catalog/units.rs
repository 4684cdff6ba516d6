use serde::{Deserialize, Serialize};

/// Syllabus strand a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitGroup {
    Pure,
    FurtherPure,
    Applied,
}

impl UnitGroup {
    pub const ALL: [UnitGroup; 3] = [UnitGroup::Pure, UnitGroup::FurtherPure, UnitGroup::Applied];

    pub fn label(self) -> &'static str {
        match self {
            UnitGroup::Pure => "Pure Mathematics",
            UnitGroup::FurtherPure => "Further Pure Mathematics",
            UnitGroup::Applied => "Applied Mathematics",
        }
    }
}

/// Immutable catalog entry for a single examinable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unit {
    pub code: &'static str,
    pub name: &'static str,
    pub exam_code: &'static str,
    pub group: UnitGroup,
    pub cashable: bool,
}

const fn unit(
    code: &'static str,
    name: &'static str,
    exam_code: &'static str,
    group: UnitGroup,
) -> Unit {
    Unit {
        code,
        name,
        exam_code,
        group,
        cashable: true,
    }
}

static UNITS: [Unit; 14] = [
    unit("P1", "Pure Mathematics 1", "WMA11", UnitGroup::Pure),
    unit("P2", "Pure Mathematics 2", "WMA12", UnitGroup::Pure),
    unit("P3", "Pure Mathematics 3", "WMA13", UnitGroup::Pure),
    unit("P4", "Pure Mathematics 4", "WMA14", UnitGroup::Pure),
    unit("FP1", "Further Pure Mathematics 1", "WFM01", UnitGroup::FurtherPure),
    unit("FP2", "Further Pure Mathematics 2", "WFM02", UnitGroup::FurtherPure),
    unit("FP3", "Further Pure Mathematics 3", "WFM03", UnitGroup::FurtherPure),
    unit("M1", "Mechanics 1", "WME01", UnitGroup::Applied),
    unit("M2", "Mechanics 2", "WME02", UnitGroup::Applied),
    unit("M3", "Mechanics 3", "WME03", UnitGroup::Applied),
    unit("S1", "Statistics 1", "WST01", UnitGroup::Applied),
    unit("S2", "Statistics 2", "WST02", UnitGroup::Applied),
    unit("S3", "Statistics 3", "WST03", UnitGroup::Applied),
    unit("D1", "Decision Mathematics 1", "WDM01", UnitGroup::Applied),
];

pub const PURE_UNITS: [&str; 4] = ["P1", "P2", "P3", "P4"];
pub const FURTHER_PURE_UNITS: [&str; 3] = ["FP1", "FP2", "FP3"];
pub const APPLIED_UNITS: [&str; 7] = ["M1", "M2", "M3", "S1", "S2", "S3", "D1"];

/// Applied pairs accepted towards IAL Mathematics, in the order guidance lists them.
pub const VALID_APPLIED_PAIRS: [[&str; 2]; 5] = [
    ["S1", "S2"],
    ["M1", "M2"],
    ["S1", "M1"],
    ["S1", "D1"],
    ["M1", "D1"],
];

/// All built-in units in syllabus order.
pub fn units() -> &'static [Unit] {
    &UNITS
}

pub fn lookup(code: &str) -> Option<&'static Unit> {
    UNITS.iter().find(|unit| unit.code == code)
}

pub fn units_in_group(group: UnitGroup) -> impl Iterator<Item = &'static Unit> {
    UNITS.iter().filter(move |unit| unit.group == group)
}

pub fn is_known(code: &str) -> bool {
    lookup(code).is_some()
}
