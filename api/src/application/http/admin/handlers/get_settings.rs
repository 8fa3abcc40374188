use axum::extract::State;
use culinary_core::domain::admin::{entities::AppSettings, ports::AdminService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/settings",
    tag = "admin",
    summary = "Global settings",
    responses(
        (status = 200, body = AppSettings)
    )
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<Response<AppSettings>, ApiError> {
    state
        .service
        .get_settings()
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
