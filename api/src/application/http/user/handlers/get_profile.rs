use axum::extract::State;
use culinary_core::domain::user::{entities::User, ports::UserService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "me",
    summary = "Current user profile",
    responses(
        (status = 200, body = User),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<User>, ApiError> {
    state
        .service
        .get_profile(identity)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
