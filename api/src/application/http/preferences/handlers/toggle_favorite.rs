use axum::{Json, extract::State};
use culinary_core::domain::{
    preferences::{entities::UserPreferences, ports::PreferencesService},
    recipe::entities::Recipe,
};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/favorites",
    tag = "me",
    summary = "Save or unsave a recipe",
    description = "Removes the recipe when one with the same id is saved, otherwise adds it.",
    request_body = Recipe,
    responses(
        (status = 200, body = UserPreferences)
    )
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(recipe): Json<Recipe>,
) -> Result<Response<UserPreferences>, ApiError> {
    state
        .service
        .toggle_favorite(identity, recipe)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
