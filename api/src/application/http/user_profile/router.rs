use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_profile::{__path_get_profile, get_profile},
    update_profile::{__path_update_profile, update_profile},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_profile, update_profile))]
pub struct UserProfileApiDoc;

pub fn user_profile_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/users/profile", state.args.server.root_path),
        get(get_profile).put(update_profile),
    )
}
