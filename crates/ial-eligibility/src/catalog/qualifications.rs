use serde::{Deserialize, Serialize};
use std::fmt;

/// Award tier: the full two-year IAL or the one-year IAS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardLevel {
    #[serde(rename = "IAL")]
    Advanced,
    #[serde(rename = "IAS")]
    AdvancedSubsidiary,
}

impl AwardLevel {
    pub fn abbreviation(self) -> &'static str {
        match self {
            AwardLevel::Advanced => "IAL",
            AwardLevel::AdvancedSubsidiary => "IAS",
        }
    }
}

/// Cash-in codes for every award the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "YMA01")]
    Mathematics,
    #[serde(rename = "XMA01")]
    AsMathematics,
    #[serde(rename = "YPM01")]
    PureMathematics,
    #[serde(rename = "XPM01")]
    AsPureMathematics,
    #[serde(rename = "YFM01")]
    FurtherMathematics,
    #[serde(rename = "XFM01")]
    AsFurtherMathematics,
}

impl Qualification {
    pub const ALL: [Qualification; 6] = [
        Qualification::Mathematics,
        Qualification::AsMathematics,
        Qualification::PureMathematics,
        Qualification::AsPureMathematics,
        Qualification::FurtherMathematics,
        Qualification::AsFurtherMathematics,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Qualification::Mathematics => "YMA01",
            Qualification::AsMathematics => "XMA01",
            Qualification::PureMathematics => "YPM01",
            Qualification::AsPureMathematics => "XPM01",
            Qualification::FurtherMathematics => "YFM01",
            Qualification::AsFurtherMathematics => "XFM01",
        }
    }

    pub fn level(self) -> AwardLevel {
        match self {
            Qualification::Mathematics
            | Qualification::PureMathematics
            | Qualification::FurtherMathematics => AwardLevel::Advanced,
            Qualification::AsMathematics
            | Qualification::AsPureMathematics
            | Qualification::AsFurtherMathematics => AwardLevel::AdvancedSubsidiary,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Qualification::Mathematics | Qualification::AsMathematics => "Mathematics",
            Qualification::PureMathematics | Qualification::AsPureMathematics => {
                "Pure Mathematics"
            }
            Qualification::FurtherMathematics | Qualification::AsFurtherMathematics => {
                "Further Mathematics"
            }
        }
    }

    /// Display label such as `IAL Further Mathematics (YFM01)`.
    pub fn label(self) -> String {
        format!(
            "{} {} ({})",
            self.level().abbreviation(),
            self.title(),
            self.code()
        )
    }

    /// Plain-language unit requirements shown alongside catalog listings.
    pub fn requirements(self) -> &'static str {
        match self {
            Qualification::Mathematics => "P1, P2, P3 and P4 plus a valid applied pair (S1+S2, M1+M2, S1+M1, S1+D1 or M1+D1)",
            Qualification::AsMathematics => "P1 and P2 plus at least one applied unit",
            Qualification::PureMathematics => "P1, P2, P3 and P4 plus at least one Further Pure unit",
            Qualification::AsPureMathematics => "P1, P2 and FP1",
            Qualification::FurtherMathematics => {
                "FP1, FP2 and FP3 with three applied units, or two Further Pure units with four applied units"
            }
            Qualification::AsFurtherMathematics => {
                "FP1 plus two further Further Pure or applied units"
            }
        }
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Serialisable summary used by catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualificationView {
    pub code: &'static str,
    pub level: AwardLevel,
    pub label: String,
    pub requirements: &'static str,
}

impl From<Qualification> for QualificationView {
    fn from(value: Qualification) -> Self {
        Self {
            code: value.code(),
            level: value.level(),
            label: value.label(),
            requirements: value.requirements(),
        }
    }
}

pub fn qualification_views() -> Vec<QualificationView> {
    Qualification::ALL.into_iter().map(QualificationView::from).collect()
}
