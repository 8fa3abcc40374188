use axum::extract::State;
use culinary_core::domain::admin::{
    entities::Transaction, ports::AdminService, value_objects::RecordTransactionInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        admin::validators::RecordTransactionValidator,
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
    path = "/transactions",
    tag = "admin",
    summary = "Record a ledger entry",
    request_body = RecordTransactionValidator,
    responses(
        (status = 201, body = Transaction)
    )
)]
pub async fn record_transaction(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RecordTransactionValidator>,
) -> Result<Response<Transaction>, ApiError> {
    let transaction = state
        .service
        .record_transaction(
            identity,
            RecordTransactionInput {
                kind: payload.kind,
                party: payload.party,
                amount: payload.amount,
                status: payload.status,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(transaction))
}
