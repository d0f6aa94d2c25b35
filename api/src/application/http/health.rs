use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use dishscale_core::domain::health::{entities::TableHealthStatus, ports::HealthCheckService};
use utoipa::OpenApi;

use crate::application::http::server::{
    api_entities::api_error::ApiError, app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(live))
        .route(&format!("{}/health/ready", root_path), get(ready))
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses((status = 200, body = String)),
)]
pub async fn live() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Reports the loaded recipe table. Answers 503 when the table is empty.",
    responses(
        (status = 200, body = TableHealthStatus),
        (status = 503, body = TableHealthStatus),
    ),
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<TableHealthStatus>), ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    let code = if status.is_empty {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    Ok((code, Json(status)))
}
