use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use shelflife_core::domain::recipe::{entities::GeneratedRecipe, ports::RecipeService};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::ListRecipesParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeView {
    #[serde(flatten)]
    pub recipe: GeneratedRecipe,
    /// Path segment for the recipe detail page.
    pub slug: String,
}

impl From<GeneratedRecipe> for RecipeView {
    fn from(recipe: GeneratedRecipe) -> Self {
        Self {
            slug: recipe.slug(),
            recipe,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListRecipesResponse {
    pub data: Vec<RecipeView>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Recent recipes",
    description = "Stored recipe suggestions, most recent first.",
    params(
        ListRecipesParams,
        ("x-user-id" = String, Header, description = "User id"),
    ),
    responses(
        (status = 200, body = ListRecipesResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
    Query(params): Query<ListRecipesParams>,
) -> Result<Response<ListRecipesResponse>, ApiError> {
    params
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let recipes = state
        .service
        .list_recipes(user_id, params.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListRecipesResponse {
        data: recipes.into_iter().map(RecipeView::from).collect(),
    }))
}
