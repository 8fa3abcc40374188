use axum::{Json, extract::State};
use culinary_core::domain::admin::{entities::AppSettings, ports::AdminService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/settings",
    tag = "admin",
    summary = "Replace the global settings",
    request_body = AppSettings,
    responses(
        (status = 200, body = AppSettings),
        (status = 400, description = "Out-of-range value")
    )
)]
pub async fn update_settings(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(settings): Json<AppSettings>,
) -> Result<Response<AppSettings>, ApiError> {
    state
        .service
        .update_settings(identity, settings)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
