use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::subscribe::{__path_subscribe, subscribe};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(subscribe))]
pub struct SyncApiDoc;

pub fn sync_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/sync/{{topic}}", state.args.server.root_path),
            get(subscribe),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
