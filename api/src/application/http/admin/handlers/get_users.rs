use axum::extract::State;
use culinary_core::domain::user::{entities::User, ports::UserService};
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
pub struct GetUsersResponse {
    pub data: Vec<User>,
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "admin",
    summary = "List every account",
    responses(
        (status = 200, body = GetUsersResponse),
        (status = 403, description = "Admins only")
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetUsersResponse>, ApiError> {
    let users = state
        .service
        .get_users(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUsersResponse { data: users }))
}
