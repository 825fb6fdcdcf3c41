use axum::extract::State;
use shelflife_core::domain::user_profile::{
    entities::UserProfile, ports::UserProfileService, value_objects::UpdateUserProfileInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        user_profile::validators::UpdateUserProfileValidator,
    },
};

#[utoipa::path(
    put,
    path = "",
    tag = "user-profile",
    summary = "Update profile",
    description = "Partial update of the onboarding answers used to tailor recipes.",
    params(
        ("x-user-id" = String, Header, description = "User id"),
    ),
    request_body = UpdateUserProfileValidator,
    responses(
        (status = 200, body = UserProfile),
        (status = 400, description = "Invalid profile")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateUserProfileValidator>,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .update_profile(
            user_id,
            UpdateUserProfileInput {
                household_size: payload.household_size,
                dietary_preferences: payload.dietary_preferences,
                cooking_style: payload.cooking_style,
                cooking_goals: payload.cooking_goals,
                onboarding_completed: payload.onboarding_completed,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
