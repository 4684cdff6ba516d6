use super::common::*;
use crate::eligibility::policy::{DecisionRule, DUAL_TABLE};
use crate::eligibility::{AwardStatus, SelectedUnits, EMPTY_SELECTION_MESSAGE};

#[test]
fn empty_selection_is_reported_in_dual_mode() {
    let result = dual(&units(&[]));

    assert!(!result.eligible);
    assert_eq!(result.message, EMPTY_SELECTION_MESSAGE);
    assert_eq!(result.rule, DecisionRule::EmptySelection);
}

#[test]
fn mathematics_and_pure_mathematics_conflict_within_a_series() {
    let result = dual(&with_pure(&["S1", "S2", "FP1"]));

    assert!(!result.eligible);
    assert_eq!(result.rule, DecisionRule::SeriesConflict);
    assert!(result.qualification.is_none());
    assert_eq!(
        result.message,
        "You meet the requirements for both IAL Mathematics (YMA01) and IAL Pure Mathematics (YPM01), \
but they cannot be cashed in within the same exam series. Choose one of them for this series."
    );
    assert_eq!(
        result.alternative_message.as_deref(),
        Some(
            "To pair IAL Mathematics (YMA01) with Further Mathematics instead, add 2 more Further Pure \
or applied units beyond your applied pair. An award that has already been cashed in must be \
uncashed before its units can be reallocated."
        )
    );
}

#[test]
fn conflict_without_fp1_points_at_the_missing_unit() {
    let result = dual(&with_pure(&["S1", "S2", "FP2"]));

    assert_eq!(result.rule, DecisionRule::SeriesConflict);
    let alternative = result.alternative_message.expect("alternative guidance");
    assert!(alternative.starts_with(
        "Pairing IAL Mathematics (YMA01) with Further Mathematics instead also requires FP1."
    ));
}

#[test]
fn spare_applied_units_unlock_mathematics_with_as_further_mathematics() {
    let result = dual(&with_pure(&["S1", "S2", "FP1", "M1", "M2"]));

    assert!(result.eligible);
    assert_eq!(
        result.rule,
        DecisionRule::MathematicsWithAsFurtherMathematics
    );
    assert_eq!(
        result.qualification.as_deref(),
        Some("IAL Mathematics (YMA01) and IAS Further Mathematics (XFM01)")
    );
    assert_eq!(
        result.message,
        "You are eligible for both IAL Mathematics (YMA01) and IAS Further Mathematics (XFM01)!"
    );
}

#[test]
fn one_spare_unit_is_not_enough_to_avoid_the_conflict() {
    let result = dual(&with_pure(&["S1", "S2", "FP1", "M1"]));

    assert_eq!(result.rule, DecisionRule::SeriesConflict);
    assert!(result
        .alternative_message
        .as_deref()
        .is_some_and(|message| message.contains("add 1 more Further Pure or applied unit ")));
}

#[test]
fn full_further_mathematics_pairs_with_mathematics() {
    let result = dual(&with_pure(&["S1", "S2", "FP1", "FP2", "FP3", "M1", "M2", "M3"]));

    assert!(result.eligible);
    assert_eq!(result.rule, DecisionRule::MathematicsWithFurtherMathematics);
    assert_eq!(
        result.qualification.as_deref(),
        Some("IAL Mathematics (YMA01) and IAL Further Mathematics (YFM01)")
    );
}

#[test]
fn single_awards_are_still_reported_without_mathematics() {
    let cases: [(&[&str], DecisionRule); 4] = [
        (
            &["FP1", "FP2", "FP3", "M1", "M2", "M3"],
            DecisionRule::FurtherMathematics,
        ),
        (&["P1", "P2", "P3", "P4", "FP1"], DecisionRule::PureMathematics),
        (&["FP1", "FP2", "S1"], DecisionRule::AsFurtherMathematics),
        (&["P1", "P2", "FP1"], DecisionRule::AsPureMathematics),
    ];

    for (codes, expected) in cases {
        let result = dual(&units(codes));
        assert!(result.eligible, "{codes:?} should be eligible");
        assert_eq!(result.rule, expected, "{codes:?}");
    }
}

#[test]
fn fp1_shortfall_matches_standard_guidance() {
    let selected = units(&["FP1", "S1"]);

    let dual_result = dual(&selected);
    let standard_result = standard(&selected);

    assert_eq!(dual_result.rule, DecisionRule::FurtherMathematicsShortfall);
    assert_eq!(dual_result.message, standard_result.message);
}

#[test]
fn as_mathematics_is_a_partial_result_in_dual_mode() {
    let result = dual(&units(&["P1", "P2", "M1"]));

    assert!(!result.eligible);
    assert_eq!(result.rule, DecisionRule::DualMissingPureUnits);
    assert_eq!(result.status(), AwardStatus::Partial);
    assert_eq!(result.headline(), "Eligible for IAS Mathematics (XMA01)");
    assert!(result
        .message
        .starts_with("You are eligible for IAS Mathematics (XMA01) only."));
    assert!(result.verification_notice().is_some());
}

#[test]
fn missing_pure_units_without_other_routes() {
    let result = dual(&units(&["P1", "S1"]));

    assert!(!result.eligible);
    assert!(result.qualification.is_none());
    assert_eq!(
        result.message,
        "Missing required Pure Mathematics units: P2, P3 and P4."
    );
}

#[test]
fn mathematics_without_fp1_is_partial() {
    let result = dual(&with_pure(&["S1", "S2"]));

    assert!(!result.eligible);
    assert_eq!(result.rule, DecisionRule::DualMissingFp1);
    assert_eq!(
        result.qualification.as_deref(),
        Some("IAL Mathematics (YMA01)")
    );
    assert_eq!(
        result.message,
        "You are eligible for IAL Mathematics (YMA01), but FP1 is required for the Further Mathematics component."
    );
}

#[test]
fn missing_fp1_and_pair_lists_both_gaps() {
    let result = dual(&with_pure(&["M2"]));

    assert_eq!(result.rule, DecisionRule::DualMissingFp1);
    assert_eq!(result.status(), AwardStatus::NotEligible);
    assert_eq!(
        result.message,
        "Missing a valid applied pair for IAL Mathematics (YMA01). \
Add one of: S1+S2, M1 (for M1+M2), S1+M1, S1+D1 or M1+D1. \
FP1 is also required for the Further Mathematics component."
    );
}

#[test]
fn modes_diverge_on_the_same_selection() {
    let selected = with_pure(&["S1", "S2", "FP1"]);

    assert_eq!(standard(&selected).rule, DecisionRule::PureMathematics);
    assert_eq!(dual(&selected).rule, DecisionRule::SeriesConflict);
}

#[test]
fn adding_units_moves_through_dual_outcomes() {
    let mut selected = with_pure(&["S1", "S2"]);
    assert_eq!(dual(&selected).rule, DecisionRule::DualMissingFp1);

    selected.insert("FP1");
    assert_eq!(dual(&selected).rule, DecisionRule::SeriesConflict);

    selected.insert("M1");
    selected.insert("M2");
    assert!(dual(&selected).eligible);
}

#[test]
fn conflict_is_checked_before_any_award() {
    assert_eq!(DUAL_TABLE.position(DecisionRule::SeriesConflict), Some(0));
    assert_eq!(
        DUAL_TABLE.otherwise.id,
        DecisionRule::MathematicsWithAsFurtherMathematics
    );
}

#[test]
fn shadowed_dual_rows_never_fire_for_any_catalog_subset() {
    let codes: Vec<&str> = crate::catalog::units().iter().map(|unit| unit.code).collect();

    for mask in 0u32..(1 << codes.len()) {
        let selected: SelectedUnits = codes
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, code)| *code)
            .collect();
        let result = dual(&selected);

        assert_ne!(
            result.rule,
            DecisionRule::DualFurtherMathematicsShortfall,
            "{selected:?}"
        );
        if result.rule == DecisionRule::DualMissingPureUnits {
            assert!(!selected.contains("FP1"), "{selected:?}");
        }
    }
}
