use crate::infra::{build_engine, parse_mode};
use clap::Args;
use ial_eligibility::catalog::{grouped_units, Qualification};
use ial_eligibility::config::AppConfig;
use ial_eligibility::eligibility::{EligibilityResult, EvaluationMode, SelectedUnits};
use ial_eligibility::error::AppError;
use ial_eligibility::roster::{RosterImporter, RosterSummary, StudentEvaluation};
use ial_eligibility::telemetry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Unit codes separated by commas or spaces, e.g. "P1,P2,P3,P4,S1,S2"
    #[arg(long)]
    pub(crate) units: String,
    /// Evaluation mode: standard or dual (defaults to ELIGIBILITY_DEFAULT_MODE)
    #[arg(long, value_parser = parse_mode)]
    pub(crate) mode: Option<EvaluationMode>,
    /// Print the raw result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// Roster CSV export with Student and Units columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Evaluation mode: standard or dual (defaults to ELIGIBILITY_DEFAULT_MODE)
    #[arg(long, value_parser = parse_mode)]
    pub(crate) mode: Option<EvaluationMode>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs { units, mode, json } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let engine = build_engine(&config);

    let selected = SelectedUnits::parse(&units);
    let mode = mode.unwrap_or(engine.default_mode());
    let result = engine.evaluate(&selected, Some(mode));

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Result payload unavailable: {}", err),
        }
    } else {
        print!("{}", render_result(&selected, mode, &result));
    }

    Ok(())
}

pub(crate) fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let RosterArgs { csv, mode } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let engine = build_engine(&config);
    let mode = mode.unwrap_or(engine.default_mode());

    let evaluations = RosterImporter::from_path(&csv, &engine, Some(mode))?;
    print!("{}", render_roster(&evaluations, mode));

    Ok(())
}

pub(crate) fn run_catalog() {
    print!("{}", render_catalog());
}

pub(crate) fn render_result(
    selected: &SelectedUnits,
    mode: EvaluationMode,
    result: &EligibilityResult,
) -> String {
    let units: Vec<&str> = selected.iter().collect();
    let units = if units.is_empty() {
        "(none)".to_string()
    } else {
        units.join(", ")
    };

    let mut lines = vec![
        format!("Eligibility check ({mode} mode)"),
        format!("- Selected units: {units}"),
    ];
    let unknown = selected.unknown_codes();
    if !unknown.is_empty() {
        lines.push(format!("- Ignored codes: {}", unknown.join(", ")));
    }
    lines.push(String::new());
    lines.push(result.headline());
    lines.push(result.message.clone());
    if let Some(alternative) = &result.alternative_message {
        lines.push(format!("Alternative: {alternative}"));
    }
    if let Some(notice) = result.verification_notice() {
        lines.push(format!("Note: {notice}"));
    }

    finish(lines)
}

pub(crate) fn render_roster(evaluations: &[StudentEvaluation], mode: EvaluationMode) -> String {
    let summary = RosterSummary::from_evaluations(evaluations);

    let mut lines = vec![
        format!("Roster eligibility ({mode} mode)"),
        format!(
            "- {} students | {} eligible | {} partial | {} not eligible",
            summary.students, summary.eligible, summary.partial, summary.not_eligible
        ),
    ];

    for evaluation in evaluations {
        lines.push(format!(
            "  - {}: {} -> {}",
            evaluation.student,
            evaluation.result.headline(),
            evaluation.result.message
        ));
        if !evaluation.unknown_units.is_empty() {
            lines.push(format!(
                "      ignored codes: {}",
                evaluation.unknown_units.join(", ")
            ));
        }
    }

    finish(lines)
}

pub(crate) fn render_catalog() -> String {
    let mut lines = vec!["Units".to_string()];
    for section in grouped_units() {
        lines.push(section.title.to_string());
        for unit in &section.units {
            lines.push(format!(
                "  - {:<4} {} [{}]",
                unit.code, unit.name, unit.exam_code
            ));
        }
    }

    lines.push(String::new());
    lines.push("Qualifications".to_string());
    for qualification in Qualification::ALL {
        lines.push(format!(
            "  - {}: {}",
            qualification.label(),
            qualification.requirements()
        ));
    }

    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
