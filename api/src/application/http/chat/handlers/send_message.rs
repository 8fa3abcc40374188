use axum::extract::State;
use culinary_core::domain::chat::{
    entities::{ChatMessage, ChatRole},
    ports::ChatService,
    value_objects::ChatInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    chat::validators::ChatValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatResponse {
    pub data: ChatMessage,
}

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Ask the cooking assistant",
    description = "Stateless: send the full history with every message.",
    request_body = ChatValidator,
    responses(
        (status = 200, body = ChatResponse)
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatValidator>,
) -> Result<Response<ChatResponse>, ApiError> {
    let reply = state
        .service
        .chat(ChatInput {
            history: payload.history,
            message: payload.message,
            context_recipes: payload.context_recipes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatResponse {
        data: ChatMessage {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::Model,
            text: reply,
        },
    }))
}
