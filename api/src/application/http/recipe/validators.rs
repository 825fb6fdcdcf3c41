use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    #[schema(example = 20)]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordRecipeClickValidator {
    #[validate(length(
        min = 1,
        max = 255,
        message = "recipe_name must be between 1 and 255 characters"
    ))]
    pub recipe_name: String,
}
