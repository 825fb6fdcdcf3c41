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
    path = "/evaluate",
    tag = "recipe",
    summary = "Evaluate the recipe trigger",
    description = "Checks the current pantry and generates recipes only when new items became urgent or triggering items were used.",
    params(
        ("x-user-id" = String, Header, description = "User id"),
    ),
    responses(
        (status = 200, body = EvaluationOutcome)
    )
)]
pub async fn evaluate(
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
) -> Result<Response<EvaluationOutcome>, ApiError> {
    let outcome = state
        .service
        .evaluate_for_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
