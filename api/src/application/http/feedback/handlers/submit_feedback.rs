use axum::extract::State;
use culinary_core::domain::feedback::{
    entities::Feedback, ports::FeedbackService, value_objects::SubmitFeedbackInput,
};

use crate::application::{
    auth::OptionalIdentity,
    http::{
        feedback::validators::SubmitFeedbackValidator,
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
    tag = "feedback",
    summary = "Rate the app",
    description = "Guests may submit; their feedback is filed under \"guest\".",
    request_body = SubmitFeedbackValidator,
    responses(
        (status = 201, body = Feedback)
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<SubmitFeedbackValidator>,
) -> Result<Response<Feedback>, ApiError> {
    let feedback = state
        .service
        .submit_feedback(
            identity,
            SubmitFeedbackInput {
                rating: payload.rating,
                accuracy_score: payload.accuracy_score,
                comment: payload.comment,
                scan_id: payload.scan_id,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(feedback))
}
