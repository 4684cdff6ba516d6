use ial_eligibility::config::AppConfig;
use ial_eligibility::eligibility::{EligibilityEngine, EvaluationMode};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_engine(config: &AppConfig) -> EligibilityEngine {
    EligibilityEngine::new(config.eligibility.clone())
}

pub(crate) fn parse_mode(raw: &str) -> Result<EvaluationMode, String> {
    raw.parse::<EvaluationMode>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mode_accepts_mixed_case() {
        assert_eq!(parse_mode("Dual"), Ok(EvaluationMode::Dual));
        assert_eq!(parse_mode("standard"), Ok(EvaluationMode::Standard));
    }

    #[test]
    fn parse_mode_reports_the_rejected_value() {
        let error = parse_mode("both").expect_err("unknown mode");
        assert!(error.contains("'both'"));
    }
}
