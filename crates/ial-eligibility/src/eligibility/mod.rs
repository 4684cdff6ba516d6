//! Qualification eligibility engine.
//!
//! Evaluation is a pure function of the selected units and the mode: the
//! predicates in `rules` are derived once, then the mode's ordered decision
//! table picks the first matching row.

mod guidance;
mod policy;
pub mod router;
mod rules;
mod selection;

#[cfg(test)]
mod tests;

pub use guidance::{EMPTY_SELECTION_MESSAGE, VERIFICATION_NOTICE};
pub use policy::DecisionRule;
pub use router::eligibility_router;
pub use selection::SelectedUnits;

use crate::config::EligibilityConfig;
use policy::{DUAL_TABLE, STANDARD_TABLE};
use rules::UnitSignals;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Which award combination the student is aiming for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// Best single award.
    #[default]
    Standard,
    /// Mathematics together with Further Mathematics.
    Dual,
}

impl EvaluationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EvaluationMode::Standard => "standard",
            EvaluationMode::Dual => "dual",
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown evaluation mode '{0}' (expected 'standard' or 'dual')")]
pub struct ModeParseError(pub String);

impl FromStr for EvaluationMode {
    type Err = ModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "dual" => Ok(Self::Dual),
            _ => Err(ModeParseError(value.to_string())),
        }
    }
}

/// Outcome of one evaluation. A fresh value is built on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_message: Option<String>,
    pub rule: DecisionRule,
}

impl EligibilityResult {
    pub(crate) fn eligible(
        rule: DecisionRule,
        qualification: String,
        message: String,
    ) -> Self {
        Self {
            eligible: true,
            qualification: Some(qualification),
            message,
            alternative_message: None,
            rule,
        }
    }

    /// Not eligible for the target award, but a lesser one is within reach.
    pub(crate) fn partial(rule: DecisionRule, qualification: String, message: String) -> Self {
        Self {
            eligible: false,
            qualification: Some(qualification),
            message,
            alternative_message: None,
            rule,
        }
    }

    pub(crate) fn not_eligible(rule: DecisionRule, message: String) -> Self {
        Self {
            eligible: false,
            qualification: None,
            message,
            alternative_message: None,
            rule,
        }
    }

    pub(crate) fn with_alternative(mut self, message: String) -> Self {
        self.alternative_message = Some(message);
        self
    }

    pub fn status(&self) -> AwardStatus {
        if self.eligible {
            AwardStatus::Eligible
        } else if self.qualification.is_some() {
            AwardStatus::Partial
        } else {
            AwardStatus::NotEligible
        }
    }

    pub fn headline(&self) -> String {
        match (self.status(), self.qualification.as_deref()) {
            (AwardStatus::Partial, Some(qualification)) => format!("Eligible for {qualification}"),
            (status, _) => status.label().to_string(),
        }
    }

    /// Results naming any award must be confirmed by an examination officer.
    pub fn verification_notice(&self) -> Option<&'static str> {
        match self.status() {
            AwardStatus::Eligible | AwardStatus::Partial => Some(VERIFICATION_NOTICE),
            AwardStatus::NotEligible => None,
        }
    }
}

/// Coarse classification used for headlines and notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardStatus {
    Eligible,
    Partial,
    NotEligible,
}

impl AwardStatus {
    pub fn label(self) -> &'static str {
        match self {
            AwardStatus::Eligible => "Eligible for Award",
            AwardStatus::Partial => "Eligible for a lesser award",
            AwardStatus::NotEligible => "Not Eligible",
        }
    }
}

/// Evaluates `selected` under `mode`.
pub fn evaluate(selected: &SelectedUnits, mode: EvaluationMode) -> EligibilityResult {
    if selected.is_empty() {
        debug!(%mode, "empty unit selection");
        return EligibilityResult::not_eligible(
            DecisionRule::EmptySelection,
            EMPTY_SELECTION_MESSAGE.to_string(),
        );
    }

    let signals = UnitSignals::from_selection(selected);
    let table = match mode {
        EvaluationMode::Standard => &STANDARD_TABLE,
        EvaluationMode::Dual => &DUAL_TABLE,
    };
    let result = table.decide(selected, &signals);

    debug!(
        %mode,
        rule = result.rule.as_str(),
        eligible = result.eligible,
        units = selected.len(),
        "eligibility evaluated"
    );
    result
}

/// Stateless front door that applies the configured default mode.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn default_mode(&self) -> EvaluationMode {
        self.config.default_mode
    }

    pub fn evaluate(
        &self,
        selected: &SelectedUnits,
        mode: Option<EvaluationMode>,
    ) -> EligibilityResult {
        let unknown = selected.unknown_codes();
        if !unknown.is_empty() {
            warn!(units = ?unknown, "ignoring unit codes outside the catalog");
        }
        evaluate(selected, mode.unwrap_or(self.config.default_mode))
    }
}
