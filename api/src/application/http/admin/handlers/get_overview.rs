use axum::extract::State;
use culinary_core::domain::admin::{entities::AdminOverview, ports::AdminService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/overview",
    tag = "admin",
    summary = "Dashboard totals",
    responses(
        (status = 200, body = AdminOverview)
    )
)]
pub async fn get_overview(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<AdminOverview>, ApiError> {
    state
        .service
        .get_overview(identity)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
