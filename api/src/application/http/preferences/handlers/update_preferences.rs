use axum::{Json, extract::State};
use culinary_core::domain::preferences::{
    entities::UserPreferences, ports::PreferencesService, value_objects::UpdatePreferencesInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        preferences::validators::UpdatePreferencesValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/preferences",
    tag = "me",
    summary = "Change cuisine, language or meal type",
    request_body = UpdatePreferencesValidator,
    responses(
        (status = 200, body = UserPreferences)
    )
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdatePreferencesValidator>,
) -> Result<Response<UserPreferences>, ApiError> {
    let preferences = state
        .service
        .update_preferences(
            identity,
            UpdatePreferencesInput {
                cuisine: payload.cuisine,
                language: payload.language,
                meal_type: payload.meal_type,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(preferences))
}
