use axum::{
    Json,
    extract::{Path, State},
};
use culinary_core::domain::booking::{
    entities::ChefBookingRequest, ports::BookingService, value_objects::UpdateBookingStatusInput,
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        booking::validators::UpdateBookingStatusValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    patch,
    path = "/{booking_id}/status",
    tag = "bookings",
    summary = "Change booking or payment status",
    params(
        ("booking_id" = Uuid, Path, description = "Booking id"),
    ),
    request_body = UpdateBookingStatusValidator,
    responses(
        (status = 200, body = ChefBookingRequest),
        (status = 403, description = "Not the client, the chef or an admin")
    )
)]
pub async fn update_booking_status(
    Path(booking_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateBookingStatusValidator>,
) -> Result<Response<ChefBookingRequest>, ApiError> {
    if payload.is_empty() {
        return Err(ApiError::BadRequest(
            "Provide status or payment_status".to_string(),
        ));
    }

    let booking = state
        .service
        .update_booking_status(
            identity,
            UpdateBookingStatusInput {
                booking_id,
                status: payload.status,
                payment_status: payload.payment_status,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(booking))
}
