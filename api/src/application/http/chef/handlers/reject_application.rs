use axum::extract::{Path, State};
use culinary_core::domain::chef::{entities::ChefApplication, ports::ChefService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/{application_id}/reject",
    tag = "chef-applications",
    summary = "Reject an application",
    params(
        ("application_id" = Uuid, Path, description = "Application id"),
    ),
    responses(
        (status = 200, body = ChefApplication)
    )
)]
pub async fn reject_application(
    Path(application_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ChefApplication>, ApiError> {
    state
        .service
        .reject_application(identity, application_id)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
