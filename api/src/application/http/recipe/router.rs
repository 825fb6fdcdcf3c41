use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    evaluate::{__path_evaluate, evaluate},
    list_recipes::{__path_list_recipes, list_recipes},
    record_click::{__path_record_click, record_click},
    refresh::{__path_refresh, refresh},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_recipes, evaluate, refresh))]
pub struct RecipeApiDoc;

#[derive(OpenApi)]
#[openapi(paths(record_click))]
pub struct RecipeClickApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            get(list_recipes),
        )
        .route(
            &format!("{}/recipes/evaluate", state.args.server.root_path),
            post(evaluate),
        )
        .route(
            &format!("{}/recipes/refresh", state.args.server.root_path),
            post(refresh),
        )
        .route(
            &format!("{}/recipe-clicks", state.args.server.root_path),
            post(record_click),
        )
}
