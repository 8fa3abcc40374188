use axum::extract::{Path, State};
use culinary_core::domain::chef::{
    entities::ChefProfile, ports::ChefService, value_objects::ApproveApplicationInput,
};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        chef::validators::ApproveApplicationValidator,
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
    path = "/{application_id}/approve",
    tag = "chef-applications",
    summary = "Approve an application",
    description = "Creates the chef profile and promotes the linked account to the chef role.",
    params(
        ("application_id" = Uuid, Path, description = "Application id"),
    ),
    request_body = ApproveApplicationValidator,
    responses(
        (status = 201, body = ChefProfile),
        (status = 400, description = "Already approved")
    )
)]
pub async fn approve_application(
    Path(application_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ApproveApplicationValidator>,
) -> Result<Response<ChefProfile>, ApiError> {
    let chef = state
        .service
        .approve_application(
            identity,
            ApproveApplicationInput {
                application_id,
                hourly_rate: payload.hourly_rate,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(chef))
}
