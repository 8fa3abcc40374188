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
    feedback::ports::FeedbackRepository,
    health::ports::HealthCheckRepository,
    preferences::ports::PreferencesRepository,
    recipe::ports::{LLMClient, ScanRepository},
    shopping_list::ports::ShoppingListRepository,
    sync::{
        entities::{ChangeEvent, SyncTopic},
        ports::ChangeNotifier,
    },
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::{UpdateProfileInput, UpdateUserInput},
    },
};

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> UserService
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
    async fn get_profile(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> Result<User, CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::Invalid("name cannot be empty".to_string()));
            }
            user.name = name;
        }
        if let Some(cuisine) = input.cuisine {
            user.cuisine = cuisine;
        }
        if let Some(diet) = input.diet {
            user.diet = diet;
        }
        user.touch();

        let user = self.user_repository.update_user(user).await?;
        self.notify(ChangeEvent::global(SyncTopic::Users));

        Ok(user)
    }

    async fn delete_account(&self, identity: Identity) -> Result<(), CoreError> {
        self.user_repository.delete_user(identity.id()).await?;

        tracing::info!(user_id = %identity.id(), "account deleted");
        self.notify(ChangeEvent::global(SyncTopic::Users));
        // Their bookings went with the account.
        self.notify(ChangeEvent::global(SyncTopic::Bookings));

        Ok(())
    }

    async fn get_users(&self, identity: Identity) -> Result<Vec<User>, CoreError> {
        ensure_policy(
            RolePolicy::is_admin(&identity),
            "only admins can list users",
        )?;

        self.user_repository.list_users().await
    }

    async fn update_user(
        &self,
        identity: Identity,
        input: UpdateUserInput,
    ) -> Result<User, CoreError> {
        ensure_policy(
            RolePolicy::is_admin(&identity),
            "only admins can change other accounts",
        )?;

        if input.user_id == identity.id() {
            return Err(CoreError::Invalid(
                "admins cannot change their own status or role".to_string(),
            ));
        }

        let mut user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(status) = input.status {
            user.status = status;
        }
        if let Some(role) = input.role {
            user.role = role;
        }

        let user = self.user_repository.update_user(user).await?;

        tracing::info!(
            user_id = %user.id,
            status = user.status.as_str(),
            role = user.role.as_str(),
            "account updated by admin"
        );
        self.notify(ChangeEvent::global(SyncTopic::Users));

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::services::test_support::{accept_notifications, mock_service},
        user::entities::{Role, UserStatus},
    };

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "ops@example.com".to_string(),
            name: "Ops".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn only_admins_list_users() {
        let service = mock_service();

        let result = service.get_users(identity(Role::User)).await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn admin_blocks_a_user() {
        let mut service = mock_service();
        let target = User::new("Ravi".to_string(), "ravi@example.com".to_string(), Role::User);
        let target_id = target.id;
        service
            .user_repository
            .expect_get_by_id()
            .returning(move |_| {
                let user = target.clone();
                Box::pin(async move { Ok(Some(user)) })
            });
        service
            .user_repository
            .expect_update_user()
            .returning(|user| Box::pin(async move { Ok(user) }));
        accept_notifications(&mut service);

        let updated = service
            .update_user(
                identity(Role::Admin),
                UpdateUserInput {
                    user_id: target_id,
                    status: Some(UserStatus::Blocked),
                    role: None,
                },
            )
            .await
            .unwrap();

        assert!(updated.is_blocked());
        assert_eq!(updated.role, Role::User);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let mut service = mock_service();
        service.user_repository.expect_get_by_id().returning(|_| {
            Box::pin(async {
                Ok(Some(User::new(
                    "Ravi".to_string(),
                    "ravi@example.com".to_string(),
                    Role::User,
                )))
            })
        });

        let result = service
            .update_profile(
                identity(Role::User),
                UpdateProfileInput {
                    name: Some("   ".to_string()),
                    cuisine: None,
                    diet: None,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn deleting_an_account_refreshes_users_and_bookings() {
        let mut service = mock_service();
        let caller = identity(Role::User);
        let id = caller.id();
        service
            .user_repository
            .expect_delete_user()
            .times(1)
            .withf(move |user_id| *user_id == id)
            .returning(|_| Box::pin(async { Ok(()) }));
        service
            .change_notifier
            .expect_publish()
            .times(1)
            .withf(|event| *event == ChangeEvent::global(SyncTopic::Users))
            .returning(|_| ());
        service
            .change_notifier
            .expect_publish()
            .times(1)
            .withf(|event| *event == ChangeEvent::global(SyncTopic::Bookings))
            .returning(|_| ());

        assert_eq!(service.delete_account(caller).await, Ok(()));
    }
}
