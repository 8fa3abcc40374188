use axum::extract::State;
use culinary_core::domain::user::{
    entities::User, ports::UserService, value_objects::UpdateProfileInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        user::validators::UpdateProfileValidator,
    },
};

#[utoipa::path(
    put,
    path = "",
    tag = "me",
    summary = "Update name, cuisine and diet",
    request_body = UpdateProfileValidator,
    responses(
        (status = 200, body = User)
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .update_profile(
            identity,
            UpdateProfileInput {
                name: payload.name,
                cuisine: payload.cuisine,
                diet: payload.diet,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
