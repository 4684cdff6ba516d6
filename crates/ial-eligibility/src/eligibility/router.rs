use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{AwardStatus, EligibilityEngine, EligibilityResult, EvaluationMode, SelectedUnits};
use crate::catalog::{grouped_units, qualification_views, QualificationView, UnitSection};
use crate::error::AppError;
use crate::roster::{RosterImporter, RosterSummary, StudentEvaluation};

/// Router builder exposing the engine and catalog over JSON.
pub fn eligibility_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/eligibility", post(evaluate_handler))
        .route("/api/v1/eligibility/roster", post(roster_handler))
        .route("/api/v1/units", get(units_handler))
        .route("/api/v1/qualifications", get(qualifications_handler))
        .with_state(engine)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EligibilityRequest {
    pub units: Vec<String>,
    #[serde(default)]
    pub mode: Option<EvaluationMode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityResponse {
    pub mode: EvaluationMode,
    pub status: AwardStatus,
    pub headline: String,
    pub result: EligibilityResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_notice: Option<&'static str>,
    pub unknown_units: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterQuery {
    #[serde(default)]
    pub mode: Option<EvaluationMode>,
}

#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub mode: EvaluationMode,
    pub summary: RosterSummary,
    pub students: Vec<StudentEvaluation>,
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    Json(request): Json<EligibilityRequest>,
) -> Json<EligibilityResponse> {
    let selected: SelectedUnits = request
        .units
        .iter()
        .map(|code| code.trim().to_ascii_uppercase())
        .filter(|code| !code.is_empty())
        .collect();
    let mode = request.mode.unwrap_or(engine.default_mode());
    let result = engine.evaluate(&selected, Some(mode));

    Json(EligibilityResponse {
        mode,
        status: result.status(),
        headline: result.headline(),
        verification_notice: result.verification_notice(),
        unknown_units: selected
            .unknown_codes()
            .into_iter()
            .map(str::to_string)
            .collect(),
        result,
    })
}

pub(crate) async fn roster_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    Query(query): Query<RosterQuery>,
    body: String,
) -> Result<Json<RosterResponse>, AppError> {
    let mode = query.mode.unwrap_or(engine.default_mode());
    let students =
        RosterImporter::from_reader(Cursor::new(body.into_bytes()), &engine, Some(mode))?;

    Ok(Json(RosterResponse {
        mode,
        summary: RosterSummary::from_evaluations(&students),
        students,
    }))
}

pub(crate) async fn units_handler() -> Json<Vec<UnitSection>> {
    Json(grouped_units())
}

pub(crate) async fn qualifications_handler() -> Json<Vec<QualificationView>> {
    Json(qualification_views())
}
