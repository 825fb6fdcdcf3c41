use axum::extract::{Path, State};
use shelflife_core::domain::pantry::{ports::PantryService, value_objects::PantryMutation};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "pantry",
    summary = "Mark pantry item as used",
    description = "Removes the item. Recipes are regenerated when an item that triggered them is gone and other items are still urgent.",
    params(
        ("item_id" = Uuid, Path, description = "Pantry item id"),
        ("x-user-id" = String, Header, description = "User id"),
    ),
    responses(
        (status = 200, body = PantryMutation),
        (status = 404, description = "Item not found")
    )
)]
pub async fn remove_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
) -> Result<Response<PantryMutation>, ApiError> {
    let mutation = state
        .service
        .remove_item(user_id, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(mutation))
}
