use axum::extract::State;
use shelflife_core::domain::trigger::{ports::TriggerService, value_objects::EvaluationOutcome};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/refresh",
    tag = "recipe",
    summary = "Regenerate recipes",
    description = "Forgets the last trigger set and evaluates again, so any urgent item produces new recipes.",
    params(
        ("x-user-id" = String, Header, description = "User id"),
    ),
    responses(
        (status = 200, body = EvaluationOutcome),
        (status = 409, description = "A generation is already running")
    )
)]
pub async fn refresh(
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
) -> Result<Response<EvaluationOutcome>, ApiError> {
    let outcome = state
        .service
        .force_refresh(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
