use axum::extract::State;
use culinary_core::domain::chef::{
    entities::ChefProfile, ports::ChefService, value_objects::UpdateChefProfileInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        chef::validators::UpdateChefProfileValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/me",
    tag = "chefs",
    summary = "Update own chef profile",
    description = "Changing the hourly rate also resets the 4-hour base price.",
    request_body = UpdateChefProfileValidator,
    responses(
        (status = 200, body = ChefProfile)
    )
)]
pub async fn update_my_chef_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateChefProfileValidator>,
) -> Result<Response<ChefProfile>, ApiError> {
    let chef = state
        .service
        .update_my_chef_profile(
            identity,
            UpdateChefProfileInput {
                mobile: payload.mobile,
                speciality: payload.speciality,
                hourly_rate: payload.hourly_rate,
                image: payload.image,
                badges: payload.badges,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(chef))
}
