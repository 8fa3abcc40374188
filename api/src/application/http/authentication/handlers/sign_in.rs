use axum::extract::State;
use culinary_core::domain::authentication::{
    entities::AuthSession, ports::AuthService, value_objects::SignInInput,
};

use crate::application::http::{
    authentication::validators::SignInValidator,
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
    path = "/signin",
    tag = "auth",
    summary = "Log in",
    request_body = SignInValidator,
    responses(
        (status = 200, body = AuthSession),
        (status = 401, description = "Incorrect email or password"),
        (status = 403, description = "Account blocked")
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SignInValidator>,
) -> Result<Response<AuthSession>, ApiError> {
    let session = state
        .service
        .sign_in(SignInInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(session))
}
