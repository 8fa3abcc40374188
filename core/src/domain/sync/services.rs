use tokio::sync::broadcast;

use crate::domain::{
    admin::ports::{LedgerRepository, SettingsRepository},
    authentication::{
        ports::{HasherRepository, TokenRepository},
        value_objects::Identity,
    },
    booking::ports::{BookingRepository, BookingService},
    chef::ports::{ChefApplicationRepository, ChefRepository, ChefService},
    common::{
        entities::app_errors::CoreError,
        policies::{RolePolicy, ensure_policy},
        services::Service,
    },
    feedback::ports::FeedbackRepository,
    health::ports::HealthCheckRepository,
    preferences::ports::PreferencesRepository,
    recipe::ports::{LLMClient, ScanRepository},
    shopping_list::ports::{ShoppingListRepository, ShoppingListService},
    sync::{
        entities::{ChangeEvent, Snapshot, SyncTopic},
        ports::{ChangeNotifier, SyncService},
    },
    user::ports::{UserRepository, UserService},
};

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> SyncService
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
    async fn snapshot(&self, identity: Identity, topic: SyncTopic) -> Result<Snapshot, CoreError> {
        let snapshot = match topic {
            SyncTopic::Chefs => Snapshot::Chefs(self.get_chefs(Some(identity)).await?),
            SyncTopic::Bookings => Snapshot::Bookings(self.get_bookings(identity).await?),
            SyncTopic::Users => Snapshot::Users(self.get_users(identity).await?),
            SyncTopic::Transactions => {
                ensure_policy(RolePolicy::is_admin(&identity), "admin topic")?;
                Snapshot::Transactions(self.ledger_repository.list_transactions().await?)
            }
            SyncTopic::Applications => Snapshot::Applications(self.get_applications(identity).await?),
            SyncTopic::Payouts => {
                ensure_policy(RolePolicy::is_admin(&identity), "admin topic")?;
                Snapshot::Payouts(self.ledger_repository.list_payouts().await?)
            }
            SyncTopic::Settings => Snapshot::Settings(self.current_settings().await?),
            SyncTopic::ShoppingList => {
                Snapshot::ShoppingList(self.get_shopping_list(identity).await?.items)
            }
        };

        Ok(snapshot)
    }

    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.change_notifier.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        admin::entities::AppSettings, common::services::test_support::mock_service,
        user::entities::Role,
    };

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "viewer@example.com".to_string(),
            name: "Viewer".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn admin_topics_are_closed_to_users() {
        let mut service = mock_service();
        service.ledger_repository.expect_list_transactions().never();

        let result = service
            .snapshot(identity(Role::User), SyncTopic::Transactions)
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn settings_snapshot_is_public() {
        let mut service = mock_service();
        service
            .settings_repository
            .expect_get_settings()
            .returning(|| Box::pin(async { Ok(None) }));

        let snapshot = service
            .snapshot(identity(Role::User), SyncTopic::Settings)
            .await
            .unwrap();

        assert_eq!(snapshot, Snapshot::Settings(AppSettings::default()));
    }

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let (sender, _) = broadcast::channel(4);
        let mut service = mock_service();
        let feed = sender.clone();
        service
            .change_notifier
            .expect_subscribe()
            .returning(move || feed.subscribe());

        let mut receiver = SyncService::subscribe(&service);
        sender
            .send(ChangeEvent::global(SyncTopic::Chefs))
            .unwrap();

        assert_eq!(
            receiver.recv().await.unwrap(),
            ChangeEvent::global(SyncTopic::Chefs)
        );
    }
}
