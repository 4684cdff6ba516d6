//! Batch evaluation of a class roster exported as CSV.
//!
//! Expected columns are `Student` and `Units`; other columns are ignored and
//! the `Units` cell may separate codes with spaces, commas or semicolons.

mod parser;

use crate::eligibility::{
    AwardStatus, EligibilityEngine, EligibilityResult, EvaluationMode, SelectedUnits,
};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster: {}", err),
            RosterImportError::Csv(err) => match err.position() {
                Some(position) => write!(
                    f,
                    "invalid roster CSV data at line {}: {}",
                    position.line(),
                    err
                ),
                None => write!(f, "invalid roster CSV data: {}", err),
            },
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
        }
    }
}

impl RosterImportError {
    /// Malformed rows are the caller's fault; read failures are ours.
    pub fn is_client_error(&self) -> bool {
        matches!(self, RosterImportError::Csv(_))
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Evaluation of a single roster line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentEvaluation {
    pub student: String,
    pub units: SelectedUnits,
    pub unknown_units: Vec<String>,
    pub status: AwardStatus,
    pub result: EligibilityResult,
}

/// Headline counts across a roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub students: usize,
    pub eligible: usize,
    pub partial: usize,
    pub not_eligible: usize,
}

impl RosterSummary {
    pub fn from_evaluations(evaluations: &[StudentEvaluation]) -> Self {
        evaluations
            .iter()
            .fold(Self::default(), |mut summary, evaluation| {
                summary.students += 1;
                match evaluation.status {
                    AwardStatus::Eligible => summary.eligible += 1,
                    AwardStatus::Partial => summary.partial += 1,
                    AwardStatus::NotEligible => summary.not_eligible += 1,
                }
                summary
            })
    }
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        engine: &EligibilityEngine,
        mode: Option<EvaluationMode>,
    ) -> Result<Vec<StudentEvaluation>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, engine, mode)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        engine: &EligibilityEngine,
        mode: Option<EvaluationMode>,
    ) -> Result<Vec<StudentEvaluation>, RosterImportError> {
        let evaluations: Vec<StudentEvaluation> = parser::parse_records(reader)?
            .into_iter()
            .map(|record| {
                let result = engine.evaluate(&record.units, mode);
                StudentEvaluation {
                    unknown_units: record
                        .units
                        .unknown_codes()
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                    status: result.status(),
                    student: record.student,
                    units: record.units,
                    result,
                }
            })
            .collect();

        info!(
            students = evaluations.len(),
            mode = %mode.unwrap_or(engine.default_mode()),
            "roster evaluated"
        );
        Ok(evaluations)
    }
}
