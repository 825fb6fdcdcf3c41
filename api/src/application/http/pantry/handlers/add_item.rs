use axum::extract::State;
use shelflife_core::domain::pantry::{
    ports::PantryService,
    value_objects::{AddPantryItemInput, PantryMutation},
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        pantry::validators::AddPantryItemValidator,
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
    post,
    path = "",
    tag = "pantry",
    summary = "Add pantry item",
    description = "Adds an item and re-evaluates the recipe trigger. The response carries the evaluation, including any recipes generated.",
    params(
        ("x-user-id" = String, Header, description = "User id"),
    ),
    request_body = AddPantryItemValidator,
    responses(
        (status = 201, body = PantryMutation),
        (status = 400, description = "Invalid item")
    )
)]
pub async fn add_item(
    State(state): State<AppState>,
    RequiredIdentity(user_id): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddPantryItemValidator>,
) -> Result<Response<PantryMutation>, ApiError> {
    let mutation = state
        .service
        .add_item(
            user_id,
            AddPantryItemInput {
                name: payload.name,
                category: payload.category,
                quantity: payload.quantity,
                unit: payload.unit,
                expiry_date: payload.expiry_date,
                added_date: payload.added_date,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(mutation))
}
