use axum::extract::State;
use culinary_core::domain::chef::{entities::ChefApplication, ports::ChefService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetApplicationsResponse {
    pub data: Vec<ChefApplication>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "chef-applications",
    summary = "List chef applications",
    responses(
        (status = 200, body = GetApplicationsResponse),
        (status = 403, description = "Admins only")
    )
)]
pub async fn get_applications(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetApplicationsResponse>, ApiError> {
    let applications = state
        .service
        .get_applications(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetApplicationsResponse { data: applications }))
}
