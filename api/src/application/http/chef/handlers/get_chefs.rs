use axum::extract::State;
use culinary_core::domain::chef::{entities::ChefProfile, ports::ChefService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::OptionalIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetChefsResponse {
    pub data: Vec<ChefProfile>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "chefs",
    summary = "List chefs",
    description = "Active chefs for everyone; admins also see suspended ones.",
    responses(
        (status = 200, body = GetChefsResponse)
    )
)]
pub async fn get_chefs(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<GetChefsResponse>, ApiError> {
    let chefs = state
        .service
        .get_chefs(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetChefsResponse { data: chefs }))
}
