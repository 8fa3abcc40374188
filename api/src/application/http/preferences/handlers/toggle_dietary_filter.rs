use axum::extract::{Path, State};
use culinary_core::domain::preferences::{entities::UserPreferences, ports::PreferencesService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/preferences/dietary-filters/{filter_id}",
    tag = "me",
    summary = "Switch a dietary filter on or off",
    params(
        ("filter_id" = String, Path, description = "One of the filters listed by /config"),
    ),
    responses(
        (status = 200, body = UserPreferences),
        (status = 400, description = "Unknown filter")
    )
)]
pub async fn toggle_dietary_filter(
    Path(filter_id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<UserPreferences>, ApiError> {
    state
        .service
        .toggle_dietary_filter(identity, filter_id)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
