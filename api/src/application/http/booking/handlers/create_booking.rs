use axum::extract::State;
use culinary_core::domain::booking::{
    entities::ChefBookingRequest, ports::BookingService, value_objects::CreateBookingInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        booking::validators::CreateBookingValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "bookings",
    summary = "Book a chef",
    description = "Price is the chef's hourly rate for 4 hours plus 500 per guest above 2.",
    request_body = CreateBookingValidator,
    responses(
        (status = 201, body = ChefBookingRequest),
        (status = 404, description = "No such chef")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateBookingValidator>,
) -> Result<Response<ChefBookingRequest>, ApiError> {
    let booking = state
        .service
        .create_booking(
            identity,
            CreateBookingInput {
                chef_id: payload.chef_id,
                date: payload.date,
                time: payload.time,
                guests: payload.guests,
                event_type: payload.event_type,
                meal_types: payload.meal_types,
                location: payload.location,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(booking))
}
