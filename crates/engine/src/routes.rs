use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::sync::RwLock;
use uuid::Uuid;

use argus_common::api::analysis::{
    AnalyzeRequest, AnalyzeResponse, DialecticRequest, DialecticResponse, PersonaInfo,
    QuickScoreRequest, QuickScoreResponse, StanceInfo,
};
use argus_common::types::{ArgumentGraph, Persona, Stance};
use argus_common::{AnalysisId, ArgusError};

use crate::cache::AnalysisCache;
use crate::pipeline::Argus;

/// Shared application state accessible from axum handlers.
pub struct AppState {
    pub argus: Argus,
    pub cache: RwLock<AnalysisCache>,
    pub metrics_handle: PrometheusHandle,
}

/// Map pipeline errors onto HTTP statuses: caller mistakes are 422, oracle
/// failures are 502, everything else is 500.
fn error_status(e: &ArgusError) -> StatusCode {
    match e {
        ArgusError::Input(_) | ArgusError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ArgusError::OracleMalformed(_) | ArgusError::OracleUnavailable(_) => {
            StatusCode::BAD_GATEWAY
        }
        ArgusError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn to_response_error(e: ArgusError) -> (StatusCode, String) {
    (error_status(&e), e.to_string())
}

/// POST /analyze — full single-pass analysis.
pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, String)> {
    let start = Instant::now();

    let graph = state
        .argus
        .analyze(
            &request.input_text,
            request.stance,
            request.persona,
            request.detect_fallacies,
        )
        .await
        .map_err(to_response_error)?;

    let analysis_id = AnalysisId::new();
    {
        let mut cache = state.cache.write().await;
        cache.insert(analysis_id, graph.clone());
    }

    Ok(Json(AnalyzeResponse {
        analysis_id,
        timestamp: chrono::Utc::now(),
        graph,
        execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    }))
}

/// POST /dialectic — multi-round dialectic analysis.
pub async fn dialectic_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DialecticRequest>,
) -> Result<Json<DialecticResponse>, (StatusCode, String)> {
    let start = Instant::now();

    let rounds = state
        .argus
        .dialectic(&request.input_text, request.rounds, request.persona)
        .await
        .map_err(to_response_error)?;

    Ok(Json(DialecticResponse {
        analysis_id: AnalysisId::new(),
        timestamp: chrono::Utc::now(),
        rounds,
        execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    }))
}

/// POST /quick-score — fast robustness check without the full response body.
pub async fn quick_score_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QuickScoreRequest>,
) -> Result<Json<QuickScoreResponse>, (StatusCode, String)> {
    let graph = state
        .argus
        .analyze(&request.input_text, Stance::Attack, Persona::Academic, true)
        .await
        .map_err(to_response_error)?;

    // Scoring always runs last, so a completed analysis carries a score.
    let robustness_score = graph.robustness_score.unwrap_or(0.0);

    Ok(Json(QuickScoreResponse {
        input_text: request.input_text,
        robustness_score,
        summary: score_summary(robustness_score).to_string(),
    }))
}

fn score_summary(score: f64) -> &'static str {
    if score >= 70.0 {
        "Strong argument — withstands critical analysis"
    } else if score >= 40.0 {
        "Moderate argument — has vulnerabilities"
    } else {
        "Weak argument — significant logical issues"
    }
}

/// GET /analysis/{id} — retrieve a cached analysis.
pub async fn get_analysis_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ArgumentGraph>, (StatusCode, String)> {
    let cache = state.cache.read().await;
    match cache.get(AnalysisId::from_uuid(id)) {
        Some(graph) => Ok(Json(graph)),
        None => Err((StatusCode::NOT_FOUND, format!("Analysis {} not found", id))),
    }
}

/// GET /personas — all available argument personas.
pub async fn personas_handler() -> Json<Vec<PersonaInfo>> {
    Json(
        Persona::ALL
            .iter()
            .map(|p| PersonaInfo {
                value: p.as_str().to_string(),
                name: title_case(p.as_str()),
                description: p.description().to_string(),
            })
            .collect(),
    )
}

/// GET /stances — all available analysis stances.
pub async fn stances_handler() -> Json<Vec<StanceInfo>> {
    Json(
        Stance::ALL
            .iter()
            .map(|s| StanceInfo {
                value: s.as_str().to_string(),
                name: title_case(s.as_str()),
                description: s.description().to_string(),
            })
            .collect(),
    )
}

fn title_case(value: &str) -> String {
    value
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// GET /health — liveness check.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "ARGUS — Adversarial Argument Engine",
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /metrics — Prometheus metrics endpoint.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> String {
    state.metrics_handle.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_summary_thresholds() {
        assert!(score_summary(70.0).starts_with("Strong"));
        assert!(score_summary(69.9).starts_with("Moderate"));
        assert!(score_summary(40.0).starts_with("Moderate"));
        assert!(score_summary(39.9).starts_with("Weak"));
        assert!(score_summary(0.0).starts_with("Weak"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("reddit_atheist"), "Reddit Atheist");
        assert_eq!(title_case("dialectic"), "Dialectic");
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            error_status(&ArgusError::Input("too short".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            error_status(&ArgusError::OracleUnavailable("down".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            error_status(&ArgusError::OracleMalformed("bad json".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            error_status(&ArgusError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
