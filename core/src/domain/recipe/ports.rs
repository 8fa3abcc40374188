use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    chat::entities::ConversationTurn,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, Scan},
        value_objects::{GenerateRecipesInput, GenerationOptions, ImagePayload},
    },
};

/// LLM Client trait for calling the hosted multimodal model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        response_schema: serde_json::Value,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Free-text reply to a multi-turn conversation.
    fn converse(
        &self,
        turns: Vec<ConversationTurn>,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ScanRepository: Send + Sync {
    fn create_scan(&self, scan: Scan) -> impl Future<Output = Result<Scan, CoreError>> + Send;

    fn count_scans(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Runs one fridge analysis. `identity` is `None` for guests, whose scans are not recorded.
    fn generate_recipes(
        &self,
        identity: Option<Identity>,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
