use axum::extract::{Path, State};
use culinary_core::domain::admin::{entities::Payout, ports::AdminService};
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
    path = "/payouts/{payout_id}/release",
    tag = "admin",
    summary = "Mark a payout as paid today",
    params(
        ("payout_id" = Uuid, Path, description = "Payout id"),
    ),
    responses(
        (status = 200, body = Payout)
    )
)]
pub async fn release_payout(
    Path(payout_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Payout>, ApiError> {
    state
        .service
        .release_payout(identity, payout_id)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
