use axum::extract::State;
use culinary_core::domain::feedback::{entities::Feedback, ports::FeedbackService};
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
pub struct GetFeedbackResponse {
    pub data: Vec<Feedback>,
}

#[utoipa::path(
    get,
    path = "/feedback",
    tag = "admin",
    summary = "Submitted feedback, newest first",
    responses(
        (status = 200, body = GetFeedbackResponse)
    )
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetFeedbackResponse>, ApiError> {
    let feedback = state
        .service
        .get_feedback(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFeedbackResponse { data: feedback }))
}
