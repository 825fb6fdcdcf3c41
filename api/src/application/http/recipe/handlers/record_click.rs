use axum::extract::State;
use serde::{Deserialize, Serialize};
use shelflife_core::domain::recipe::{ports::RecipeService, value_objects::RecordRecipeClickInput};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::RecordRecipeClickValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecordRecipeClickResponse {
    pub recorded: bool,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Track recipe click",
    description = "Best effort: storage failures are logged and the request still succeeds.",
    params(
        ("x-user-id" = String, Header, description = "User id"),
    ),
    request_body = RecordRecipeClickValidator,
    responses(
        (status = 202, body = RecordRecipeClickResponse)
    )
)]
pub async fn record_click(
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RecordRecipeClickValidator>,
) -> Result<Response<RecordRecipeClickResponse>, ApiError> {
    state
        .service
        .record_recipe_click(
            user_id,
            RecordRecipeClickInput {
                recipe_name: payload.recipe_name,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Accepted(RecordRecipeClickResponse { recorded: true }))
}
