use axum::extract::State;
use culinary_core::domain::admin::{
    entities::Payout, ports::AdminService, value_objects::CreatePayoutInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        admin::validators::CreatePayoutValidator,
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
    path = "/payouts",
    tag = "admin",
    summary = "Schedule a payout",
    request_body = CreatePayoutValidator,
    responses(
        (status = 201, body = Payout)
    )
)]
pub async fn create_payout(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreatePayoutValidator>,
) -> Result<Response<Payout>, ApiError> {
    let payout = state
        .service
        .create_payout(
            identity,
            CreatePayoutInput {
                chef_name: payload.chef_name,
                amount: payload.amount,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(payout))
}
