use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_identity::{__path_get_identity, get_identity},
    sign_in::{__path_sign_in, sign_in},
    sign_up::{__path_sign_up, sign_up},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(sign_up, sign_in, get_identity))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/auth/signup", root_path), post(sign_up))
        .route(&format!("{}/auth/signin", root_path), post(sign_in))
        .route(&format!("{}/auth/me", root_path), get(get_identity))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
