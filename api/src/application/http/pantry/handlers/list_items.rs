use axum::extract::State;
use serde::{Deserialize, Serialize};
use shelflife_core::domain::pantry::{ports::PantryService, value_objects::PantryItemView};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListPantryItemsResponse {
    pub data: Vec<PantryItemView>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "pantry",
    summary = "List pantry items",
    description = "Lists the caller's pantry items with derived freshness, expired first, then expiring, then fresh.",
    params(
        ("x-user-id" = String, Header, description = "User id"),
    ),
    responses(
        (status = 200, body = ListPantryItemsResponse),
        (status = 401, description = "Missing or invalid x-user-id header")
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
) -> Result<Response<ListPantryItemsResponse>, ApiError> {
    let items = state
        .service
        .list_items(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListPantryItemsResponse { data: items }))
}
