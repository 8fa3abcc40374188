use axum::extract::State;
use culinary_core::domain::chef::{
    entities::ChefApplication, ports::ChefService, value_objects::ApplyAsChefInput,
};

use crate::application::{
    auth::OptionalIdentity,
    http::{
        chef::validators::ApplyAsChefValidator,
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
    post,
    path = "",
    tag = "chef-applications",
    summary = "Apply to become a chef partner",
    request_body = ApplyAsChefValidator,
    responses(
        (status = 201, body = ChefApplication)
    )
)]
pub async fn apply_as_chef(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<ApplyAsChefValidator>,
) -> Result<Response<ChefApplication>, ApiError> {
    let application = state
        .service
        .apply(
            identity,
            ApplyAsChefInput {
                first_name: payload.first_name,
                last_name: payload.last_name,
                email: payload.email,
                specialty: payload.specialty,
                years_experience: payload.years_experience,
                resume_data: payload.resume_data,
                resume_name: payload.resume_name,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(application))
}
