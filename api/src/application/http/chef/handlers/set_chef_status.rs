use axum::{
    Json,
    extract::{Path, State},
};
use culinary_core::domain::chef::{entities::ChefProfile, ports::ChefService};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        chef::validators::SetChefStatusValidator,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/{chef_id}/status",
    tag = "chefs",
    summary = "Suspend or reactivate a chef",
    params(
        ("chef_id" = Uuid, Path, description = "Chef id"),
    ),
    request_body = SetChefStatusValidator,
    responses(
        (status = 200, body = ChefProfile),
        (status = 403, description = "Admins only")
    )
)]
pub async fn set_chef_status(
    Path(chef_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<SetChefStatusValidator>,
) -> Result<Response<ChefProfile>, ApiError> {
    state
        .service
        .set_chef_status(identity, chef_id, payload.status)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
