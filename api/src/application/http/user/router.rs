use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    delete_account::{__path_delete_account, delete_account},
    get_profile::{__path_get_profile, get_profile},
    update_profile::{__path_update_profile, update_profile},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_profile, update_profile, delete_account))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/me", state.args.server.root_path),
            get(get_profile).put(update_profile).delete(delete_account),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
