use axum::extract::State;
use culinary_core::domain::{
    authentication::{entities::AuthSession, ports::AuthService, value_objects::SignUpInput},
    user::entities::Role,
};

use crate::application::http::{
    authentication::validators::SignUpValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    summary = "Create an account",
    description = "Registers a user or chef account and opens a session.",
    request_body = SignUpValidator,
    responses(
        (status = 201, body = AuthSession),
        (status = 400, description = "Password too short"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SignUpValidator>,
) -> Result<Response<AuthSession>, ApiError> {
    let session = state
        .service
        .sign_up(SignUpInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            role: payload.role.unwrap_or(Role::User),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(session))
}
