use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_booking::{__path_create_booking, create_booking},
    get_bookings::{__path_get_bookings, get_bookings},
    get_chef_stats::{__path_get_chef_stats, get_chef_stats},
    update_booking_status::{__path_update_booking_status, update_booking_status},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(create_booking, get_bookings, update_booking_status, get_chef_stats))]
pub struct BookingApiDoc;

pub fn booking_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/bookings", root_path),
            post(create_booking).get(get_bookings),
        )
        .route(&format!("{}/bookings/stats", root_path), get(get_chef_stats))
        .route(
            &format!("{}/bookings/{{booking_id}}/status", root_path),
            patch(update_booking_status),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
