use axum::extract::State;
use shelflife_core::domain::user_profile::{entities::UserProfile, ports::UserProfileService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "user-profile",
    summary = "Get profile",
    description = "Onboarding answers. Users who never onboarded get an empty profile.",
    params(
        ("x-user-id" = String, Header, description = "User id"),
    ),
    responses(
        (status = 200, body = UserProfile)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .get_profile(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
