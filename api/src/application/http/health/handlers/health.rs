use axum::extract::State;
use shelflife_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Service health",
    description = "Always answers while the process is up; `status` is `degraded` when the database is unreachable.",
    responses(
        (status = 200, body = HealthStatus)
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthStatus>, ApiError> {
    Ok(Response::OK(state.service.health().await))
}
