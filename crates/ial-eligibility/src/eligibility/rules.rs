use super::selection::SelectedUnits;
use crate::catalog::{APPLIED_UNITS, FURTHER_PURE_UNITS, PURE_UNITS, VALID_APPLIED_PAIRS};

/// Predicate inputs derived once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnitSignals {
    pub has_pure_complete: bool,
    pub has_p1_p2: bool,
    pub further_pure_count: usize,
    pub has_fp1: bool,
    pub applied_count: usize,
    pub has_valid_applied_pair: bool,
}

impl UnitSignals {
    pub fn from_selection(selected: &SelectedUnits) -> Self {
        Self {
            has_pure_complete: selected.contains_all(&PURE_UNITS),
            has_p1_p2: selected.contains_all(&["P1", "P2"]),
            further_pure_count: selected.count_of(&FURTHER_PURE_UNITS),
            has_fp1: selected.contains("FP1"),
            applied_count: selected.count_of(&APPLIED_UNITS),
            has_valid_applied_pair: VALID_APPLIED_PAIRS
                .iter()
                .any(|pair| selected.contains_all(pair)),
        }
    }

    /// Units beyond FP1 that count towards Further Mathematics.
    ///
    /// Only meaningful when FP1 is held.
    pub fn further_maths_units(&self) -> usize {
        self.further_pure_count.saturating_sub(1) + self.applied_count
    }

    /// Applied units left once the IAL Mathematics pair has been set aside.
    pub fn spare_applied_count(&self) -> usize {
        if self.has_valid_applied_pair {
            self.applied_count.saturating_sub(2)
        } else {
            self.applied_count
        }
    }

    /// Further Mathematics units available in dual mode, excluding the applied pair.
    pub fn dual_further_maths_units(&self) -> usize {
        self.further_pure_count.saturating_sub(1) + self.spare_applied_count()
    }

    pub fn eligible_yfm01(&self) -> bool {
        (self.further_pure_count == 3 && self.applied_count >= 3)
            || (self.further_pure_count >= 2 && self.applied_count >= 4)
    }

    pub fn eligible_xfm01(&self) -> bool {
        self.has_fp1 && self.further_maths_units() >= 2
    }

    pub fn eligible_ypm01(&self) -> bool {
        self.has_pure_complete && self.further_pure_count >= 1
    }

    pub fn eligible_xpm01(&self) -> bool {
        self.has_p1_p2 && self.has_fp1 && !self.has_pure_complete
    }

    pub fn eligible_yma01(&self) -> bool {
        self.has_pure_complete && self.has_valid_applied_pair
    }

    pub fn eligible_xma01(&self) -> bool {
        self.has_p1_p2 && self.applied_count >= 1 && !self.has_pure_complete
    }

    /// Whether YMA01 can be cashed in alongside a Further Mathematics award.
    pub fn can_pair_with_further_maths(&self) -> bool {
        self.eligible_yma01() && self.has_fp1 && self.dual_further_maths_units() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(codes: &[&str]) -> UnitSignals {
        UnitSignals::from_selection(&codes.iter().copied().collect::<SelectedUnits>())
    }

    #[test]
    fn counts_ignore_codes_outside_the_catalog() {
        let signals = signals(&["P1", "P2", "FP1", "FP4", "D2", "M1"]);
        assert!(signals.has_p1_p2);
        assert!(!signals.has_pure_complete);
        assert_eq!(signals.further_pure_count, 1);
        assert_eq!(signals.applied_count, 1);
        assert!(!signals.has_valid_applied_pair);
    }

    #[test]
    fn applied_pairs_are_an_allow_list() {
        assert!(signals(&["S1", "D1"]).has_valid_applied_pair);
        assert!(signals(&["M1", "D1"]).has_valid_applied_pair);
        assert!(!signals(&["M2", "D1"]).has_valid_applied_pair);
        assert!(!signals(&["S2", "S3"]).has_valid_applied_pair);
        assert!(!signals(&["M2", "S2"]).has_valid_applied_pair);
    }

    #[test]
    fn further_maths_full_award_has_two_routes() {
        assert!(signals(&["FP1", "FP2", "FP3", "M1", "M2", "M3"]).eligible_yfm01());
        assert!(signals(&["FP1", "FP2", "M1", "M2", "S1", "S2"]).eligible_yfm01());
        assert!(!signals(&["FP1", "FP2", "M1", "M2", "S1"]).eligible_yfm01());
        assert!(!signals(&["FP1", "FP2", "FP3", "M1", "M2"]).eligible_yfm01());
    }

    #[test]
    fn as_further_maths_requires_fp1_and_two_more_units() {
        assert!(signals(&["FP1", "FP2", "S1"]).eligible_xfm01());
        assert!(signals(&["FP1", "M1", "D1"]).eligible_xfm01());
        assert!(!signals(&["FP1", "M1"]).eligible_xfm01());
        assert!(!signals(&["FP2", "FP3", "M1"]).eligible_xfm01());
    }

    #[test]
    fn as_awards_are_withheld_once_pure_is_complete() {
        let complete = signals(&["P1", "P2", "P3", "P4", "FP1", "S1"]);
        assert!(!complete.eligible_xpm01());
        assert!(!complete.eligible_xma01());
        assert!(complete.eligible_ypm01());

        let partial = signals(&["P1", "P2", "FP1", "S1"]);
        assert!(partial.eligible_xpm01());
        assert!(partial.eligible_xma01());
    }

    #[test]
    fn dual_allocation_sets_the_applied_pair_aside() {
        let tight = signals(&["P1", "P2", "P3", "P4", "S1", "S2", "FP1"]);
        assert_eq!(tight.further_maths_units(), 2);
        assert_eq!(tight.dual_further_maths_units(), 0);
        assert!(!tight.can_pair_with_further_maths());

        let roomy = signals(&["P1", "P2", "P3", "P4", "S1", "S2", "FP1", "M1", "M2"]);
        assert_eq!(roomy.spare_applied_count(), 2);
        assert_eq!(roomy.dual_further_maths_units(), 2);
        assert!(roomy.can_pair_with_further_maths());
    }
}
