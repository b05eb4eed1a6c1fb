use crate::assets::serve_asset;
use crate::infra::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use points_planner::catalog::CatalogView;
use points_planner::error::AppError;
use points_planner::export::export;
use points_planner::plan::EMPTY_PLAN_PROMPT;
use points_planner::{ExportFormat, PlanBlock, Selection, SelectionField};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::info;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/version", get(version_endpoint))
        .route("/api/v1/catalog", get(catalog_endpoint))
        .route(
            "/api/v1/selection",
            get(selection_endpoint).put(replace_selection_endpoint),
        )
        .route("/api/v1/selection/toggle", post(toggle_endpoint))
        .route("/api/v1/selection/reset", post(reset_endpoint))
        .route(
            "/api/v1/plan",
            get(stored_plan_endpoint).post(plan_endpoint),
        )
        .route("/api/v1/export/:format", get(export_endpoint))
        .fallback(serve_asset)
        .with_state(state)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlanResponse {
    pub(crate) selection: Selection,
    pub(crate) blocks: Vec<PlanBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) airport_hint: Option<&'static str>,
}

impl PlanResponse {
    fn for_selection(selection: Selection) -> Self {
        let blocks = selection.plan();
        let message = blocks.is_empty().then_some(EMPTY_PLAN_PROMPT);
        let airport_hint = selection.airport_hint();
        Self {
            selection,
            blocks,
            message,
            airport_hint,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToggleRequest {
    pub(crate) field: SelectionField,
    pub(crate) id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ToggleResponse {
    pub(crate) selection: Selection,
    pub(crate) selected: bool,
}

pub(crate) async fn healthcheck(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "ts": Utc::now().timestamp_millis(),
        "uptime_seconds": state.started_at.elapsed().as_secs(),
    }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn version_endpoint(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "version": state.build.version,
        "buildTime": state.build.build_time,
        "environment": state.environment.label(),
    }))
}

pub(crate) async fn catalog_endpoint() -> Json<CatalogView> {
    Json(CatalogView::snapshot())
}

pub(crate) async fn selection_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Selection>, AppError> {
    Ok(Json(state.load_selection().await?))
}

pub(crate) async fn replace_selection_endpoint(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<PlanResponse>, AppError> {
    let (selection, ()) = state
        .edit_selection(move |current| *current = selection)
        .await?;
    Ok(Json(PlanResponse::for_selection(selection)))
}

pub(crate) async fn toggle_endpoint(
    State(state): State<AppState>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    if request.id.trim().is_empty() {
        return Err(AppError::Request("id must not be blank".to_string()));
    }

    let ToggleRequest { field, id } = request;
    let (selection, selected) = {
        let id = id.clone();
        state
            .edit_selection(move |current| current.toggle(field, &id))
            .await?
    };
    info!(field = ?field, id = %id, selected, "selection toggled");
    Ok(Json(ToggleResponse {
        selection,
        selected,
    }))
}

pub(crate) async fn reset_endpoint(
    State(state): State<AppState>,
) -> Result<Json<PlanResponse>, AppError> {
    let (selection, ()) = state.edit_selection(Selection::reset).await?;
    info!("selection reset to defaults");
    Ok(Json(PlanResponse::for_selection(selection)))
}

pub(crate) async fn stored_plan_endpoint(
    State(state): State<AppState>,
) -> Result<Json<PlanResponse>, AppError> {
    Ok(Json(PlanResponse::for_selection(
        state.load_selection().await?,
    )))
}

/// Plans an ad-hoc selection without touching the stored one.
pub(crate) async fn plan_endpoint(Json(selection): Json<Selection>) -> Json<PlanResponse> {
    Json(PlanResponse::for_selection(selection))
}

pub(crate) async fn export_endpoint(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<Response, AppError> {
    let format: ExportFormat = format.parse()?;
    let selection = state.load_selection().await?;
    let payload = export(format, &selection, &selection.plan())?;

    let disposition = format!("attachment; filename=\"{}\"", payload.file_name);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, payload.mime.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload.content,
    )
        .into_response())
}
