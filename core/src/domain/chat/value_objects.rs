use crate::domain::chat::entities::ChatMessage;

pub struct ChatInput {
    pub history: Vec<ChatMessage>,
    pub message: String,
    /// Titles of the recipes currently on the user's screen.
    pub context_recipes: Vec<String>,
}
