use culinary_core::domain::chat::entities::ChatMessage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatValidator {
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    #[validate(length(min = 1, max = 4000, message = "message must be between 1 and 4000 characters"))]
    pub message: String,
    /// Titles of the recipes on screen.
    #[serde(default)]
    pub context_recipes: Vec<String>,
}
