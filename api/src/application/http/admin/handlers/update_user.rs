use axum::{
    Json,
    extract::{Path, State},
};
use culinary_core::domain::user::{
    entities::User, ports::UserService, value_objects::UpdateUserInput,
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        admin::validators::UpdateUserValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "admin",
    summary = "Block, unblock or change the role of an account",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = User)
    )
)]
pub async fn update_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<UpdateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .update_user(
            identity,
            UpdateUserInput {
                user_id,
                status: payload.status,
                role: payload.role,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
