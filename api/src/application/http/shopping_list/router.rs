use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_missing_items::{__path_add_missing_items, add_missing_items},
    get_shopping_list::{__path_get_shopping_list, get_shopping_list},
    remove_item::{__path_remove_item, remove_item},
    save_shopping_list::{__path_save_shopping_list, save_shopping_list},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_shopping_list, save_shopping_list, add_missing_items, remove_item))]
pub struct ShoppingListApiDoc;

pub fn shopping_list_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/shopping-list", root_path),
            get(get_shopping_list).put(save_shopping_list),
        )
        .route(
            &format!("{}/shopping-list/missing", root_path),
            post(add_missing_items),
        )
        .route(
            &format!("{}/shopping-list/items/{{index}}", root_path),
            delete(remove_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
