use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};
use utoipa::OpenApi;

use super::{
    handlers::{
        generate_recipes::{__path_generate_recipes, generate_recipes},
        upload_fridge_photo::{__path_upload_fridge_photo, upload_fridge_photo},
    },
    validators::MAX_IMAGE_SIZE,
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(generate_recipes, upload_fridge_photo))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/recipes/generate", root_path),
            post(generate_recipes),
        )
        .route(
            &format!("{}/recipes/generate/upload", root_path),
            post(upload_fridge_photo),
        )
        // Base64 inflates the photo by a third; leave room for it and the JSON around it.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE * 2))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
