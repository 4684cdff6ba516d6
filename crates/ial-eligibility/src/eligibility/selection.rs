use crate::catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Caller-owned set of chosen unit codes.
///
/// Codes are kept verbatim; anything outside the catalog is simply never
/// matched by the eligibility predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedUnits(BTreeSet<String>);

impl SelectedUnits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses free text such as `"p1, P2;FP1 s1"` into normalized codes.
    pub fn parse(raw: &str) -> Self {
        raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| token.to_ascii_uppercase())
            .collect()
    }

    pub fn insert(&mut self, code: impl Into<String>) -> bool {
        self.0.insert(code.into())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn contains_all(&self, codes: &[&str]) -> bool {
        codes.iter().all(|code| self.contains(code))
    }

    pub fn count_of(&self, codes: &[&str]) -> usize {
        codes.iter().filter(|code| self.contains(code)).count()
    }

    pub fn missing_from<'a>(&self, codes: &[&'a str]) -> Vec<&'a str> {
        codes
            .iter()
            .copied()
            .filter(|code| !self.contains(code))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn unknown_codes(&self) -> Vec<&str> {
        self.iter().filter(|code| !catalog::is_known(code)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectedUnits {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
