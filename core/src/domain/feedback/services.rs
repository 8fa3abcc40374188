use crate::domain::{
    admin::ports::{LedgerRepository, SettingsRepository},
    authentication::{
        ports::{HasherRepository, TokenRepository},
        value_objects::Identity,
    },
    booking::ports::BookingRepository,
    chef::ports::{ChefApplicationRepository, ChefRepository},
    common::{
        entities::app_errors::CoreError,
        policies::{RolePolicy, ensure_policy},
        services::Service,
    },
    feedback::{
        entities::{Feedback, GUEST_USERNAME},
        ports::{FeedbackRepository, FeedbackService},
        value_objects::SubmitFeedbackInput,
    },
    health::ports::HealthCheckRepository,
    preferences::ports::PreferencesRepository,
    recipe::ports::{LLMClient, ScanRepository},
    shopping_list::ports::ShoppingListRepository,
    sync::ports::ChangeNotifier,
    user::ports::UserRepository,
};

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> FeedbackService
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
    async fn submit_feedback(
        &self,
        identity: Option<Identity>,
        input: SubmitFeedbackInput,
    ) -> Result<Feedback, CoreError> {
        input.validate()?;

        let (user_id, username) = match identity {
            Some(identity) => (Some(identity.id()), identity.name),
            None => (None, GUEST_USERNAME.to_string()),
        };

        let feedback = self
            .feedback_repository
            .create_feedback(Feedback::new(
                user_id,
                username,
                input.rating,
                input.accuracy_score,
                input.comment,
                input.scan_id,
            ))
            .await?;

        tracing::info!(
            feedback_id = %feedback.id,
            rating = feedback.rating,
            "feedback received"
        );
        Ok(feedback)
    }

    async fn get_feedback(&self, identity: Identity) -> Result<Vec<Feedback>, CoreError> {
        ensure_policy(RolePolicy::is_admin(&identity), "only admins can read feedback")?;

        self.feedback_repository.list_feedback().await
    }
}
