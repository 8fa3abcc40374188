use crate::domain::{
    admin::ports::{LedgerRepository, SettingsRepository},
    authentication::ports::{HasherRepository, TokenRepository},
    booking::ports::BookingRepository,
    chat::{
        entities::UNAVAILABLE_REPLY,
        helpers::{build_conversation, reply_or_fallback},
        ports::ChatService,
        value_objects::ChatInput,
    },
    chef::ports::{ChefApplicationRepository, ChefRepository},
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackRepository,
    health::ports::HealthCheckRepository,
    preferences::ports::PreferencesRepository,
    recipe::{
        ports::{LLMClient, ScanRepository},
        value_objects::GenerationOptions,
    },
    shopping_list::ports::ShoppingListRepository,
    sync::ports::ChangeNotifier,
    user::ports::UserRepository,
};

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> ChatService
    for Service<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
where
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
    CH: ChefRepository,
    CA: ChefApplicationRepository,
    B: BookingRepository,
    SL: ShoppingListRepository,
    P: PreferencesRepository,
    SC: ScanRepository,
    F: FeedbackRepository,
    L: LedgerRepository,
    ST: SettingsRepository,
    LLM: LLMClient,
    N: ChangeNotifier,
    HC: HealthCheckRepository,
{
    async fn chat(&self, input: ChatInput) -> Result<String, CoreError> {
        let settings = self.current_settings().await?;
        let turns = build_conversation(&input.history, &input.message, &input.context_recipes);

        let reply = self
            .llm_client
            .converse(
                turns,
                GenerationOptions {
                    temperature: Some(settings.temperature),
                    max_output_tokens: Some(settings.max_tokens),
                },
            )
            .await;

        match reply {
            Ok(reply) => Ok(reply_or_fallback(reply)),
            Err(e) => {
                tracing::error!("Chat failed: {}", e);
                Ok(UNAVAILABLE_REPLY.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chat::entities::{ChatRole, FALLBACK_REPLY},
        common::services::test_support::{default_settings, mock_service},
    };

    fn input() -> ChatInput {
        ChatInput {
            history: vec![],
            message: "What can I make with eggs?".to_string(),
            context_recipes: vec!["Masala Omelette".to_string()],
        }
    }

    #[tokio::test]
    async fn empty_reply_becomes_the_fallback() {
        let mut service = mock_service();
        default_settings(&mut service);
        service
            .llm_client
            .expect_converse()
            .returning(|_, _| Box::pin(async { Ok(String::new()) }));

        assert_eq!(service.chat(input()).await, Ok(FALLBACK_REPLY.to_string()));
    }

    #[tokio::test]
    async fn context_and_message_reach_the_model() {
        let mut service = mock_service();
        default_settings(&mut service);
        service
            .llm_client
            .expect_converse()
            .withf(|turns, _| {
                turns[0].text.contains("The user is looking at: Masala Omelette.")
                    && turns.last().is_some_and(|t| {
                        t.role == ChatRole::User && t.text == "What can I make with eggs?"
                    })
            })
            .returning(|_, _| Box::pin(async { Ok("A frittata.".to_string()) }));

        assert_eq!(service.chat(input()).await, Ok("A frittata.".to_string()));
    }

    #[tokio::test]
    async fn unreachable_model_gets_an_apology() {
        let mut service = mock_service();
        default_settings(&mut service);
        service.llm_client.expect_converse().returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        assert_eq!(service.chat(input()).await, Ok(UNAVAILABLE_REPLY.to_string()));
    }
}
