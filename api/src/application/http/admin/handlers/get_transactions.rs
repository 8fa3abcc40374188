use axum::extract::State;
use culinary_core::domain::admin::{entities::Transaction, ports::AdminService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTransactionsResponse {
    pub data: Vec<Transaction>,
}

#[utoipa::path(
    get,
    path = "/transactions",
    tag = "admin",
    summary = "Ledger entries",
    responses(
        (status = 200, body = GetTransactionsResponse)
    )
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetTransactionsResponse>, ApiError> {
    let transactions = state
        .service
        .get_transactions(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTransactionsResponse { data: transactions }))
}
