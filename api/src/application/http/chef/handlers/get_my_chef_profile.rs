use axum::extract::State;
use culinary_core::domain::chef::{entities::ChefProfile, ports::ChefService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/me",
    tag = "chefs",
    summary = "Own chef profile",
    responses(
        (status = 200, body = ChefProfile),
        (status = 404, description = "Caller has no chef profile")
    )
)]
pub async fn get_my_chef_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ChefProfile>, ApiError> {
    state
        .service
        .get_my_chef_profile(identity)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
