use axum::extract::State;
use culinary_core::domain::preferences::{entities::UserPreferences, ports::PreferencesService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/preferences",
    tag = "me",
    summary = "Favorites, dietary filters and generation preferences",
    responses(
        (status = 200, body = UserPreferences)
    )
)]
pub async fn get_preferences(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<UserPreferences>, ApiError> {
    state
        .service
        .get_preferences(identity)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
