use axum::extract::{Path, State};
use culinary_core::domain::chef::{entities::ChefProfile, ports::ChefService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{chef_id}",
    tag = "chefs",
    summary = "Get a chef",
    params(
        ("chef_id" = Uuid, Path, description = "Chef id"),
    ),
    responses(
        (status = 200, body = ChefProfile),
        (status = 404, description = "No such chef")
    )
)]
pub async fn get_chef(
    Path(chef_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ChefProfile>, ApiError> {
    state
        .service
        .get_chef(chef_id)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
