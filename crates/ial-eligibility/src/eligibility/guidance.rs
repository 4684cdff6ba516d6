use super::rules::UnitSignals;
use super::selection::SelectedUnits;
use crate::catalog::{Qualification, PURE_UNITS, VALID_APPLIED_PAIRS};

pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one unit";

pub const VERIFICATION_NOTICE: &str =
    "Remember to check with your examination officer for the final verification of your eligibility.";

pub(crate) fn more_units(count: usize, kind: &str) -> String {
    let noun = if count == 1 { "unit" } else { "units" };
    format!("{count} more {kind} {noun}")
}

/// Joins items as `a`, `a and b` or `a, b and c`.
pub(crate) fn join_list<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} {} {}", head.join(", "), conjunction, last.as_ref())
        }
    }
}

pub(crate) fn eligible_for(qualification: Qualification) -> String {
    format!("You are eligible for the {qualification} qualification!")
}

pub(crate) fn eligible_for_pair(first: Qualification, second: Qualification) -> String {
    format!("You are eligible for both {first} and {second}!")
}

pub(crate) fn further_maths_shortfall(signals: &UnitSignals) -> String {
    let for_full = 4usize.saturating_sub(signals.applied_count);
    let for_as = 2usize.saturating_sub(signals.further_maths_units());
    format!(
        "You have FP1 but not enough additional units for a Further Mathematics award. \
Add {} to work towards {}, or {} for {}.",
        more_units(for_full, "applied"),
        Qualification::FurtherMathematics,
        more_units(for_as, "Further Pure or applied"),
        Qualification::AsFurtherMathematics,
    )
}

pub(crate) fn as_further_maths_route(signals: &UnitSignals) -> String {
    let needed = 2usize.saturating_sub(signals.further_maths_units());
    if needed == 0 {
        format!(
            "Your FP1 and additional units already satisfy {}.",
            Qualification::AsFurtherMathematics
        )
    } else {
        format!(
            "For {}, add {}.",
            Qualification::AsFurtherMathematics,
            more_units(needed, "Further Pure or applied")
        )
    }
}

pub(crate) fn missing_pure(selected: &SelectedUnits) -> String {
    let missing = selected.missing_from(&PURE_UNITS);
    format!(
        "Missing required Pure Mathematics units: {}.",
        join_list(&missing, "and")
    )
}

/// What to add for IAS Mathematics when some pure work is already selected.
pub(crate) fn as_mathematics_route(
    selected: &SelectedUnits,
    signals: &UnitSignals,
) -> Option<String> {
    if selected.count_of(&PURE_UNITS) == 0 {
        return None;
    }

    let mut needed: Vec<String> = selected
        .missing_from(&["P1", "P2"])
        .into_iter()
        .map(str::to_string)
        .collect();
    if signals.applied_count == 0 {
        needed.push("one applied unit".to_string());
    }
    if needed.is_empty() {
        return None;
    }

    Some(format!(
        "To qualify for {}, add {}.",
        Qualification::AsMathematics,
        join_list(&needed, "and")
    ))
}

pub(crate) fn missing_pure_with_route(selected: &SelectedUnits, signals: &UnitSignals) -> String {
    let mut message = missing_pure(selected);
    if let Some(route) = as_mathematics_route(selected, signals) {
        message.push(' ');
        message.push_str(&route);
    }
    message
}

/// One completion per valid pair, in table order, e.g. `S1+S2` or `M1 (for S1+M1)`.
pub(crate) fn pair_completions(selected: &SelectedUnits) -> Vec<String> {
    VALID_APPLIED_PAIRS
        .iter()
        .map(|pair| {
            let missing = selected.missing_from(pair);
            let full = pair.join("+");
            if missing.len() == pair.len() {
                full
            } else if missing.is_empty() {
                format!("{full} (already selected)")
            } else {
                format!("{} (for {full})", missing.join("+"))
            }
        })
        .collect()
}

pub(crate) fn applied_pair_needed(selected: &SelectedUnits) -> String {
    format!(
        "Missing a valid applied pair for {}. Add one of: {}.",
        Qualification::Mathematics,
        join_list(&pair_completions(selected), "or")
    )
}

pub(crate) fn mathematics_completion(selected: &SelectedUnits, signals: &UnitSignals) -> String {
    let mut parts: Vec<String> = selected
        .missing_from(&PURE_UNITS)
        .into_iter()
        .map(str::to_string)
        .collect();
    if !signals.has_valid_applied_pair {
        parts.push(format!(
            "a valid applied pair (one of: {})",
            join_list(&pair_completions(selected), "or")
        ));
    }
    format!(
        "To complete {}, add {}.",
        Qualification::Mathematics,
        join_list(&parts, "and")
    )
}

pub(crate) fn series_conflict() -> String {
    format!(
        "You meet the requirements for both {} and {}, but they cannot be cashed in \
within the same exam series. Choose one of them for this series.",
        Qualification::Mathematics,
        Qualification::PureMathematics
    )
}

pub(crate) fn series_conflict_alternative(signals: &UnitSignals) -> String {
    let route = if signals.has_fp1 {
        let needed = 2usize.saturating_sub(signals.dual_further_maths_units());
        format!(
            "To pair {} with Further Mathematics instead, add {} beyond your applied pair.",
            Qualification::Mathematics,
            more_units(needed, "Further Pure or applied")
        )
    } else {
        format!(
            "Pairing {} with Further Mathematics instead also requires FP1.",
            Qualification::Mathematics
        )
    };
    format!(
        "{route} An award that has already been cashed in must be uncashed before its units can be reallocated."
    )
}

pub(crate) fn dual_as_mathematics_only() -> String {
    format!(
        "You are eligible for {} only. A dual award needs P1, P2, P3 and P4 with a valid applied pair \
for {}, plus FP1 and two further units for Further Mathematics.",
        Qualification::AsMathematics,
        Qualification::Mathematics
    )
}

pub(crate) fn dual_needs_fp1(selected: &SelectedUnits, signals: &UnitSignals) -> String {
    if signals.has_valid_applied_pair {
        format!(
            "You are eligible for {}, but FP1 is required for the Further Mathematics component.",
            Qualification::Mathematics
        )
    } else {
        format!(
            "{} FP1 is also required for the Further Mathematics component.",
            applied_pair_needed(selected)
        )
    }
}

pub(crate) fn dual_further_maths_shortfall(signals: &UnitSignals) -> String {
    let needed = 2usize.saturating_sub(signals.dual_further_maths_units());
    format!(
        "You are eligible for {}, but Further Mathematics needs {} beyond FP1 and your applied pair.",
        Qualification::Mathematics,
        more_units(needed, "Further Pure or applied")
    )
}
