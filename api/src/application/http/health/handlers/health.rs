use axum::extract::State;
use culinary_core::domain::health::ports::HealthCheckService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Database round trip in milliseconds",
    responses(
        (status = 200, body = u64),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<u64>, ApiError> {
    state
        .service
        .health()
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
