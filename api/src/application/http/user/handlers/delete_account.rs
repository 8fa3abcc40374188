use axum::{extract::State, http::StatusCode};
use culinary_core::domain::user::ports::UserService;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    delete,
    path = "",
    tag = "me",
    summary = "Delete own account",
    responses(
        (status = 204, description = "Account deleted")
    )
)]
pub async fn delete_account(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_account(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
