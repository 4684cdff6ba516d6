use ial_eligibility::eligibility::{AwardStatus, DecisionRule, EligibilityEngine, EvaluationMode};
use ial_eligibility::roster::{RosterImporter, RosterSummary};

#[test]
fn sample_roster_imports_in_standard_mode() {
    let data = include_bytes!("../sample_roster.csv");
    let engine = EligibilityEngine::default();

    let evaluations =
        RosterImporter::from_reader(&data[..], &engine, None).expect("sample roster imports");

    assert_eq!(evaluations.len(), 8);
    let rules: Vec<DecisionRule> = evaluations.iter().map(|entry| entry.result.rule).collect();
    assert_eq!(
        rules,
        vec![
            DecisionRule::Mathematics,
            DecisionRule::MissingAppliedPair,
            DecisionRule::FurtherMathematics,
            DecisionRule::PureMathematics,
            DecisionRule::AsPureMathematics,
            DecisionRule::PureMathematics,
            DecisionRule::AsMathematicsOnly,
            DecisionRule::EmptySelection,
        ]
    );

    let summary = RosterSummary::from_evaluations(&evaluations);
    assert_eq!(summary.students, 8);
    assert_eq!(summary.eligible, 6);
    assert_eq!(summary.not_eligible, 2);
}

#[test]
fn sample_roster_in_dual_mode_flags_conflicts() {
    let data = include_bytes!("../sample_roster.csv");
    let engine = EligibilityEngine::default();

    let evaluations = RosterImporter::from_reader(&data[..], &engine, Some(EvaluationMode::Dual))
        .expect("sample roster imports");

    let dara = evaluations
        .iter()
        .find(|entry| entry.student == "Dara Singh")
        .expect("Dara present");
    assert_eq!(dara.result.rule, DecisionRule::SeriesConflict);

    let farah = evaluations
        .iter()
        .find(|entry| entry.student == "Farah Haddad")
        .expect("Farah present");
    assert_eq!(farah.status, AwardStatus::Eligible);

    let amara = evaluations
        .iter()
        .find(|entry| entry.student == "Amara Okafor")
        .expect("Amara present");
    assert_eq!(amara.status, AwardStatus::Partial);
}
