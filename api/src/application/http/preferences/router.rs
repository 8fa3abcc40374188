use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_favorites::{__path_get_favorites, get_favorites},
    get_preferences::{__path_get_preferences, get_preferences},
    toggle_dietary_filter::{__path_toggle_dietary_filter, toggle_dietary_filter},
    toggle_favorite::{__path_toggle_favorite, toggle_favorite},
    update_preferences::{__path_update_preferences, update_preferences},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    get_preferences,
    update_preferences,
    toggle_dietary_filter,
    get_favorites,
    toggle_favorite
))]
pub struct PreferencesApiDoc;

pub fn preferences_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/me/preferences", root_path),
            get(get_preferences).put(update_preferences),
        )
        .route(
            &format!("{}/me/preferences/dietary-filters/{{filter_id}}", root_path),
            post(toggle_dietary_filter),
        )
        .route(
            &format!("{}/me/favorites", root_path),
            get(get_favorites).post(toggle_favorite),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
