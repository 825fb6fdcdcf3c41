use crate::application::http::{
    health::router::HealthApiDoc,
    pantry::router::PantryApiDoc,
    recipe::router::{RecipeApiDoc, RecipeClickApiDoc},
    user_profile::router::UserProfileApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ShelfLife API"
    ),
    nest(
        (path = "/pantry", api = PantryApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/recipe-clicks", api = RecipeClickApiDoc),
        (path = "/users/profile", api = UserProfileApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
