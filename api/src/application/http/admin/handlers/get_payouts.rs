use axum::extract::State;
use culinary_core::domain::admin::{entities::Payout, ports::AdminService};
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
pub struct GetPayoutsResponse {
    pub data: Vec<Payout>,
}

#[utoipa::path(
    get,
    path = "/payouts",
    tag = "admin",
    summary = "Chef payouts",
    responses(
        (status = 200, body = GetPayoutsResponse)
    )
)]
pub async fn get_payouts(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPayoutsResponse>, ApiError> {
    let payouts = state
        .service
        .get_payouts(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPayoutsResponse { data: payouts }))
}
