use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitFeedbackValidator {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(range(min = 0, max = 5, message = "accuracy_score must be between 0 and 5"))]
    pub accuracy_score: i32,
    #[serde(default)]
    #[validate(length(max = 2000, message = "comment is limited to 2000 characters"))]
    pub comment: String,
    pub scan_id: Option<Uuid>,
}
