use axum::extract::State;
use culinary_core::domain::booking::{entities::ChefStats, ports::BookingService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/stats",
    tag = "bookings",
    summary = "Chef dashboard figures",
    description = "Revenue from completed bookings, pending count and payout after commission.",
    responses(
        (status = 200, body = ChefStats),
        (status = 404, description = "Caller has no chef profile")
    )
)]
pub async fn get_chef_stats(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ChefStats>, ApiError> {
    state
        .service
        .get_chef_stats(identity)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
