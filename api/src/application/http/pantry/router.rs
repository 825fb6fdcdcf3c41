use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

use super::handlers::{
    add_item::{__path_add_item, add_item},
    get_stats::{__path_get_stats, get_stats},
    list_items::{__path_list_items, list_items},
    remove_item::{__path_remove_item, remove_item},
    update_item::{__path_update_item, update_item},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_items, get_stats, add_item, update_item, remove_item))]
pub struct PantryApiDoc;

pub fn pantry_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/pantry", state.args.server.root_path),
            get(list_items).post(add_item),
        )
        .route(
            &format!("{}/pantry/stats", state.args.server.root_path),
            get(get_stats),
        )
        .route(
            &format!("{}/pantry/{{item_id}}", state.args.server.root_path),
            put(update_item).delete(remove_item),
        )
}
