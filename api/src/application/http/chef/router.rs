use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    apply_as_chef::{__path_apply_as_chef, apply_as_chef},
    approve_application::{__path_approve_application, approve_application},
    get_applications::{__path_get_applications, get_applications},
    get_chef::{__path_get_chef, get_chef},
    get_chefs::{__path_get_chefs, get_chefs},
    get_my_chef_profile::{__path_get_my_chef_profile, get_my_chef_profile},
    reject_application::{__path_reject_application, reject_application},
    set_chef_status::{__path_set_chef_status, set_chef_status},
    update_my_chef_profile::{__path_update_my_chef_profile, update_my_chef_profile},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    get_chefs,
    get_chef,
    get_my_chef_profile,
    update_my_chef_profile,
    set_chef_status
))]
pub struct ChefApiDoc;

#[derive(OpenApi)]
#[openapi(paths(apply_as_chef, get_applications, approve_application, reject_application))]
pub struct ChefApplicationApiDoc;

pub fn chef_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/chefs", root_path), get(get_chefs))
        .route(
            &format!("{}/chefs/me", root_path),
            get(get_my_chef_profile).put(update_my_chef_profile),
        )
        .route(&format!("{}/chefs/{{chef_id}}", root_path), get(get_chef))
        .route(
            &format!("{}/chefs/{{chef_id}}/status", root_path),
            put(set_chef_status),
        )
        .route(
            &format!("{}/chef-applications", root_path),
            post(apply_as_chef).get(get_applications),
        )
        .route(
            &format!("{}/chef-applications/{{application_id}}/approve", root_path),
            post(approve_application),
        )
        .route(
            &format!("{}/chef-applications/{{application_id}}/reject", root_path),
            post(reject_application),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
