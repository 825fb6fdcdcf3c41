use axum::extract::{Path, State};
use shelflife_core::domain::pantry::{
    ports::PantryService,
    value_objects::{PantryMutation, UpdatePantryItemInput},
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        pantry::validators::UpdatePantryItemValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "pantry",
    summary = "Update pantry item",
    params(
        ("item_id" = Uuid, Path, description = "Pantry item id"),
        ("x-user-id" = String, Header, description = "User id"),
    ),
    request_body = UpdatePantryItemValidator,
    responses(
        (status = 200, body = PantryMutation),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdatePantryItemValidator>,
) -> Result<Response<PantryMutation>, ApiError> {
    let mutation = state
        .service
        .update_item(
            user_id,
            item_id,
            UpdatePantryItemInput {
                name: payload.name,
                category: payload.category,
                quantity: payload.quantity,
                unit: payload.unit,
                expiry_date: payload.expiry_date,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(mutation))
}
