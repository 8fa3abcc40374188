use axum::extract::State;
use culinary_core::domain::booking::{entities::ChefBookingRequest, ports::BookingService};
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
pub struct GetBookingsResponse {
    pub data: Vec<ChefBookingRequest>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "bookings",
    summary = "Bookings visible to the caller",
    responses(
        (status = 200, body = GetBookingsResponse)
    )
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetBookingsResponse>, ApiError> {
    let bookings = state
        .service
        .get_bookings(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetBookingsResponse { data: bookings }))
}
