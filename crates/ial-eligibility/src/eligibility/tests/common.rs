use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::EligibilityConfig;
use crate::eligibility::{
    eligibility_router, evaluate, EligibilityEngine, EligibilityResult, EvaluationMode,
    SelectedUnits,
};

pub(super) const FULL_PURE: [&str; 4] = ["P1", "P2", "P3", "P4"];

pub(super) fn units(codes: &[&str]) -> SelectedUnits {
    codes.iter().copied().collect()
}

pub(super) fn with_pure(extra: &[&str]) -> SelectedUnits {
    FULL_PURE.iter().chain(extra.iter()).copied().collect()
}

pub(super) fn standard(selected: &SelectedUnits) -> EligibilityResult {
    evaluate(selected, EvaluationMode::Standard)
}

pub(super) fn dual(selected: &SelectedUnits) -> EligibilityResult {
    evaluate(selected, EvaluationMode::Dual)
}

pub(super) fn router_with_default(mode: EvaluationMode) -> axum::Router {
    eligibility_router(Arc::new(EligibilityEngine::new(EligibilityConfig {
        default_mode: mode,
    })))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
