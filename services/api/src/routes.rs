use crate::infra::{export_filename, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use ecrp::appraisal::{to_csv_string, AnswerSheet, AppraisalReport, QuestionCatalog, CATALOG};
use ecrp::error::AppError;
use serde_json::json;

pub(crate) fn appraisal_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/appraisal/evaluate", post(evaluate_endpoint))
        .route("/api/v1/appraisal/export", post(export_endpoint))
        .route("/api/v1/appraisal/catalog", get(catalog_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluate_endpoint(
    Extension(state): Extension<AppState>,
    Json(sheet): Json<AnswerSheet>,
) -> Json<AppraisalReport> {
    Json(state.evaluator.evaluate(&sheet))
}

pub(crate) async fn export_endpoint(
    Extension(state): Extension<AppState>,
    Json(sheet): Json<AnswerSheet>,
) -> Result<impl IntoResponse, AppError> {
    let report = state.evaluator.evaluate(&sheet);
    let csv = to_csv_string(&report)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(Local::now().date_naive())
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

pub(crate) async fn catalog_endpoint() -> Json<QuestionCatalog> {
    Json(CATALOG)
}
