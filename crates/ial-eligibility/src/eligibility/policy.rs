use super::guidance;
use super::rules::UnitSignals;
use super::selection::SelectedUnits;
use super::EligibilityResult;
use crate::catalog::Qualification;
use serde::{Deserialize, Serialize};

/// Identifies the decision-table row that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    EmptySelection,
    FurtherMathematics,
    PureMathematics,
    AsFurtherMathematics,
    AsPureMathematics,
    FurtherMathematicsShortfall,
    AsMathematicsOnly,
    MissingPureUnits,
    MissingAppliedPair,
    Mathematics,
    SeriesConflict,
    MathematicsWithFurtherMathematics,
    DualMissingPureUnits,
    DualMissingFp1,
    DualFurtherMathematicsShortfall,
    MathematicsWithAsFurtherMathematics,
}

impl DecisionRule {
    pub fn as_str(self) -> &'static str {
        match self {
            DecisionRule::EmptySelection => "empty_selection",
            DecisionRule::FurtherMathematics => "further_mathematics",
            DecisionRule::PureMathematics => "pure_mathematics",
            DecisionRule::AsFurtherMathematics => "as_further_mathematics",
            DecisionRule::AsPureMathematics => "as_pure_mathematics",
            DecisionRule::FurtherMathematicsShortfall => "further_mathematics_shortfall",
            DecisionRule::AsMathematicsOnly => "as_mathematics_only",
            DecisionRule::MissingPureUnits => "missing_pure_units",
            DecisionRule::MissingAppliedPair => "missing_applied_pair",
            DecisionRule::Mathematics => "mathematics",
            DecisionRule::SeriesConflict => "series_conflict",
            DecisionRule::MathematicsWithFurtherMathematics => {
                "mathematics_with_further_mathematics"
            }
            DecisionRule::DualMissingPureUnits => "dual_missing_pure_units",
            DecisionRule::DualMissingFp1 => "dual_missing_fp1",
            DecisionRule::DualFurtherMathematicsShortfall => "dual_further_mathematics_shortfall",
            DecisionRule::MathematicsWithAsFurtherMathematics => {
                "mathematics_with_as_further_mathematics"
            }
        }
    }
}

type Predicate = fn(&UnitSignals) -> bool;
type Outcome = fn(&SelectedUnits, &UnitSignals) -> EligibilityResult;

/// One row of an ordered decision table.
pub(crate) struct Rule {
    pub id: DecisionRule,
    pub applies: Predicate,
    pub outcome: Outcome,
}

/// Ordered rows evaluated top to bottom; `otherwise` runs when no row matches.
pub(crate) struct DecisionTable {
    pub rules: &'static [Rule],
    pub otherwise: Rule,
}

impl DecisionTable {
    pub fn decide(&self, selected: &SelectedUnits, signals: &UnitSignals) -> EligibilityResult {
        let rule = self
            .rules
            .iter()
            .find(|rule| (rule.applies)(signals))
            .unwrap_or(&self.otherwise);
        let result = (rule.outcome)(selected, signals);
        debug_assert_eq!(result.rule, rule.id, "outcome tagged with a foreign rule");
        result
    }

    #[cfg(test)]
    pub fn position(&self, id: DecisionRule) -> Option<usize> {
        self.rules.iter().position(|rule| rule.id == id)
    }
}

fn award(rule: DecisionRule, qualification: Qualification) -> EligibilityResult {
    EligibilityResult::eligible(rule, qualification.label(), guidance::eligible_for(qualification))
}

fn dual_award(rule: DecisionRule, first: Qualification, second: Qualification) -> EligibilityResult {
    EligibilityResult::eligible(
        rule,
        format!("{} and {}", first.label(), second.label()),
        guidance::eligible_for_pair(first, second),
    )
}

pub(crate) static STANDARD_TABLE: DecisionTable = DecisionTable {
    rules: &[
        Rule {
            id: DecisionRule::FurtherMathematics,
            applies: |s| s.eligible_yfm01(),
            outcome: |_, _| award(DecisionRule::FurtherMathematics, Qualification::FurtherMathematics),
        },
        Rule {
            id: DecisionRule::PureMathematics,
            applies: |s| s.eligible_ypm01(),
            outcome: |_, _| award(DecisionRule::PureMathematics, Qualification::PureMathematics),
        },
        Rule {
            id: DecisionRule::AsFurtherMathematics,
            applies: |s| s.eligible_xfm01(),
            outcome: |_, _| {
                award(DecisionRule::AsFurtherMathematics, Qualification::AsFurtherMathematics)
            },
        },
        Rule {
            id: DecisionRule::AsPureMathematics,
            applies: |s| s.eligible_xpm01(),
            outcome: |_, _| award(DecisionRule::AsPureMathematics, Qualification::AsPureMathematics),
        },
        Rule {
            id: DecisionRule::FurtherMathematicsShortfall,
            applies: |s| s.has_fp1,
            outcome: |_, s| {
                EligibilityResult::not_eligible(
                    DecisionRule::FurtherMathematicsShortfall,
                    guidance::further_maths_shortfall(s),
                )
            },
        },
        Rule {
            id: DecisionRule::AsMathematicsOnly,
            applies: |s| !s.has_pure_complete && s.eligible_xma01(),
            outcome: |selected, s| {
                award(DecisionRule::AsMathematicsOnly, Qualification::AsMathematics)
                    .with_alternative(guidance::mathematics_completion(selected, s))
            },
        },
        Rule {
            id: DecisionRule::MissingPureUnits,
            applies: |s| !s.has_pure_complete,
            outcome: |selected, s| {
                EligibilityResult::not_eligible(
                    DecisionRule::MissingPureUnits,
                    guidance::missing_pure_with_route(selected, s),
                )
            },
        },
        Rule {
            id: DecisionRule::MissingAppliedPair,
            applies: |s| s.has_pure_complete && !s.has_valid_applied_pair,
            outcome: |selected, _| {
                EligibilityResult::not_eligible(
                    DecisionRule::MissingAppliedPair,
                    guidance::applied_pair_needed(selected),
                )
            },
        },
    ],
    otherwise: Rule {
        id: DecisionRule::Mathematics,
        applies: |_| true,
        outcome: |_, _| award(DecisionRule::Mathematics, Qualification::Mathematics),
    },
};

pub(crate) static DUAL_TABLE: DecisionTable = DecisionTable {
    rules: &[
        Rule {
            id: DecisionRule::SeriesConflict,
            applies: |s| {
                s.eligible_ypm01() && s.eligible_yma01() && !s.can_pair_with_further_maths()
            },
            outcome: |_, s| {
                EligibilityResult::not_eligible(
                    DecisionRule::SeriesConflict,
                    guidance::series_conflict(),
                )
                .with_alternative(guidance::series_conflict_alternative(s))
            },
        },
        Rule {
            id: DecisionRule::MathematicsWithFurtherMathematics,
            applies: |s| s.eligible_yma01() && s.eligible_yfm01(),
            outcome: |_, _| {
                dual_award(
                    DecisionRule::MathematicsWithFurtherMathematics,
                    Qualification::Mathematics,
                    Qualification::FurtherMathematics,
                )
            },
        },
        Rule {
            id: DecisionRule::FurtherMathematics,
            applies: |s| s.eligible_yfm01() && !s.eligible_yma01(),
            outcome: |_, _| award(DecisionRule::FurtherMathematics, Qualification::FurtherMathematics),
        },
        Rule {
            id: DecisionRule::PureMathematics,
            applies: |s| s.eligible_ypm01() && !s.eligible_yma01(),
            outcome: |_, _| award(DecisionRule::PureMathematics, Qualification::PureMathematics),
        },
        Rule {
            id: DecisionRule::AsFurtherMathematics,
            applies: |s| s.eligible_xfm01() && !s.eligible_yma01(),
            outcome: |_, _| {
                award(DecisionRule::AsFurtherMathematics, Qualification::AsFurtherMathematics)
            },
        },
        Rule {
            id: DecisionRule::AsPureMathematics,
            applies: |s| s.eligible_xpm01(),
            outcome: |_, _| award(DecisionRule::AsPureMathematics, Qualification::AsPureMathematics),
        },
        Rule {
            id: DecisionRule::FurtherMathematicsShortfall,
            applies: |s| s.has_fp1 && !s.eligible_xfm01(),
            outcome: |_, s| {
                EligibilityResult::not_eligible(
                    DecisionRule::FurtherMathematicsShortfall,
                    guidance::further_maths_shortfall(s),
                )
            },
        },
        Rule {
            id: DecisionRule::DualMissingPureUnits,
            applies: |s| !s.has_pure_complete,
            outcome: |selected, s| {
                // Shadowed: FP1 without complete pure units always stops at an earlier row.
                if s.has_fp1 {
                    EligibilityResult::not_eligible(
                        DecisionRule::DualMissingPureUnits,
                        format!(
                            "{} {}",
                            guidance::missing_pure(selected),
                            guidance::as_further_maths_route(s)
                        ),
                    )
                } else if s.eligible_xma01() {
                    EligibilityResult::partial(
                        DecisionRule::DualMissingPureUnits,
                        Qualification::AsMathematics.label(),
                        guidance::dual_as_mathematics_only(),
                    )
                    .with_alternative(guidance::mathematics_completion(selected, s))
                } else {
                    EligibilityResult::not_eligible(
                        DecisionRule::DualMissingPureUnits,
                        guidance::missing_pure(selected),
                    )
                }
            },
        },
        Rule {
            id: DecisionRule::DualMissingFp1,
            applies: |s| !s.has_fp1,
            outcome: |selected, s| {
                let message = guidance::dual_needs_fp1(selected, s);
                if s.eligible_yma01() {
                    EligibilityResult::partial(
                        DecisionRule::DualMissingFp1,
                        Qualification::Mathematics.label(),
                        message,
                    )
                } else {
                    EligibilityResult::not_eligible(DecisionRule::DualMissingFp1, message)
                }
            },
        },
        // Shadowed by `SeriesConflict` (pure complete) and `PureMathematics`
        // (no valid pair), so no selection reaches this row in the current order.
        Rule {
            id: DecisionRule::DualFurtherMathematicsShortfall,
            applies: |s| s.has_fp1 && s.dual_further_maths_units() < 2,
            outcome: |_, s| {
                EligibilityResult::not_eligible(
                    DecisionRule::DualFurtherMathematicsShortfall,
                    guidance::dual_further_maths_shortfall(s),
                )
            },
        },
    ],
    otherwise: Rule {
        id: DecisionRule::MathematicsWithAsFurtherMathematics,
        applies: |_| true,
        outcome: |_, _| {
            dual_award(
                DecisionRule::MathematicsWithAsFurtherMathematics,
                Qualification::Mathematics,
                Qualification::AsFurtherMathematics,
            )
        },
    },
};
