use axum::extract::State;
use shelflife_core::domain::pantry::{ports::PantryService, value_objects::PantryStats};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/stats",
    tag = "pantry",
    summary = "Pantry statistics",
    description = "Counts by freshness status, items needing attention and the saved percentage.",
    params(
        ("x-user-id" = String, Header, description = "User id"),
    ),
    responses(
        (status = 200, body = PantryStats)
    )
)]
pub async fn get_stats(
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
) -> Result<Response<PantryStats>, ApiError> {
    let stats = state
        .service
        .get_stats(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(stats))
}
