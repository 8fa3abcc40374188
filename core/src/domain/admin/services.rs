use uuid::Uuid;

use crate::domain::{
    admin::{
        entities::{AdminOverview, AppSettings, Payout, Transaction, total_revenue},
        ports::{AdminService, LedgerRepository, SettingsRepository},
        value_objects::{CreatePayoutInput, RecordTransactionInput},
    },
    authentication::{
        ports::{HasherRepository, TokenRepository},
        value_objects::Identity,
    },
    booking::ports::BookingRepository,
    chef::{
        entities::ApplicationStatus,
        ports::{ChefApplicationRepository, ChefRepository},
    },
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
    user::ports::UserRepository,
};

fn validate_settings(settings: &AppSettings) -> Result<(), CoreError> {
    if settings.app_name.trim().is_empty() {
        return Err(CoreError::Invalid("app name cannot be empty".to_string()));
    }
    if !(0.0..=2.0).contains(&settings.temperature) {
        return Err(CoreError::Invalid(
            "temperature must be between 0 and 2".to_string(),
        ));
    }
    if settings.max_tokens <= 0 {
        return Err(CoreError::Invalid("max tokens must be positive".to_string()));
    }
    if !(0..=100).contains(&settings.commission_rate) || !(0..=100).contains(&settings.chef_commission)
    {
        return Err(CoreError::Invalid(
            "commission rates are percentages between 0 and 100".to_string(),
        ));
    }
    Ok(())
}

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> AdminService
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
    async fn get_settings(&self) -> Result<AppSettings, CoreError> {
        self.current_settings().await
    }

    async fn update_settings(
        &self,
        identity: Identity,
        settings: AppSettings,
    ) -> Result<AppSettings, CoreError> {
        ensure_policy(RolePolicy::is_admin(&identity), "only admins can change settings")?;
        validate_settings(&settings)?;

        let settings = self.settings_repository.save_settings(settings).await?;

        tracing::info!(
            maintenance_mode = settings.maintenance_mode,
            auto_approve_chefs = settings.auto_approve_chefs,
            "settings updated"
        );
        self.notify(ChangeEvent::global(SyncTopic::Settings));

        Ok(settings)
    }

    async fn get_transactions(&self, identity: Identity) -> Result<Vec<Transaction>, CoreError> {
        ensure_policy(RolePolicy::is_admin(&identity), "only admins can see the ledger")?;

        self.ledger_repository.list_transactions().await
    }

    async fn record_transaction(
        &self,
        identity: Identity,
        input: RecordTransactionInput,
    ) -> Result<Transaction, CoreError> {
        ensure_policy(RolePolicy::is_admin(&identity), "only admins can write the ledger")?;

        let transaction = self
            .ledger_repository
            .create_transaction(Transaction::new(
                input.kind,
                input.party,
                input.amount,
                input.status,
            ))
            .await?;
        self.notify(ChangeEvent::global(SyncTopic::Transactions));

        Ok(transaction)
    }

    async fn get_payouts(&self, identity: Identity) -> Result<Vec<Payout>, CoreError> {
        ensure_policy(RolePolicy::is_admin(&identity), "only admins can see payouts")?;

        self.ledger_repository.list_payouts().await
    }

    async fn create_payout(
        &self,
        identity: Identity,
        input: CreatePayoutInput,
    ) -> Result<Payout, CoreError> {
        ensure_policy(RolePolicy::is_admin(&identity), "only admins can create payouts")?;

        if input.amount <= 0 {
            return Err(CoreError::Invalid("payout amount must be positive".to_string()));
        }

        let payout = self
            .ledger_repository
            .create_payout(Payout::new(input.chef_name, input.amount))
            .await?;
        self.notify(ChangeEvent::global(SyncTopic::Payouts));

        Ok(payout)
    }

    async fn release_payout(&self, identity: Identity, payout_id: Uuid) -> Result<Payout, CoreError> {
        ensure_policy(RolePolicy::is_admin(&identity), "only admins can release payouts")?;

        let mut payout = self
            .ledger_repository
            .get_payout(payout_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        payout.release();

        let payout = self.ledger_repository.update_payout(payout).await?;

        tracing::info!(payout_id = %payout.id, amount = payout.amount, "payout released");
        self.notify(ChangeEvent::global(SyncTopic::Payouts));

        Ok(payout)
    }

    async fn get_overview(&self, identity: Identity) -> Result<AdminOverview, CoreError> {
        ensure_policy(RolePolicy::is_admin(&identity), "only admins can see the overview")?;

        let transactions = self.ledger_repository.list_transactions().await?;
        let applications = self.chef_application_repository.list_applications().await?;
        let users = self.user_repository.list_users().await?;
        let chefs = self.chef_repository.list_chefs().await?;
        let bookings = self.booking_repository.list_all().await?;
        let scans = self.scan_repository.count_scans().await?;

        Ok(AdminOverview {
            total_revenue: total_revenue(&transactions),
            pending_applications: applications
                .iter()
                .filter(|a| a.status == ApplicationStatus::Pending)
                .count(),
            users: users.len(),
            chefs: chefs.len(),
            bookings: bookings.len(),
            scans,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        admin::entities::PayoutStatus,
        common::services::test_support::{accept_notifications, default_settings, mock_service},
        user::entities::Role,
    };

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn settings_fall_back_to_defaults() {
        let mut service = mock_service();
        default_settings(&mut service);

        assert_eq!(service.get_settings().await, Ok(AppSettings::default()));
    }

    #[tokio::test]
    async fn only_admins_change_settings() {
        let mut service = mock_service();
        service.settings_repository.expect_save_settings().never();

        let result = service
            .update_settings(identity(Role::Chef), AppSettings::default())
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn out_of_range_commission_is_rejected() {
        let service = mock_service();
        let settings = AppSettings {
            chef_commission: 120,
            ..AppSettings::default()
        };

        let result = service.update_settings(identity(Role::Admin), settings).await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn released_payout_is_completed() {
        let mut service = mock_service();
        let payout = Payout::new("Chef Arjun".to_string(), 9000);
        let payout_id = payout.id;
        service
            .ledger_repository
            .expect_get_payout()
            .returning(move |_| {
                let payout = payout.clone();
                Box::pin(async move { Ok(Some(payout)) })
            });
        service
            .ledger_repository
            .expect_update_payout()
            .returning(|payout| Box::pin(async move { Ok(payout) }));
        accept_notifications(&mut service);

        let released = service
            .release_payout(identity(Role::Admin), payout_id)
            .await
            .unwrap();

        assert_eq!(released.status, PayoutStatus::Completed);
        assert!(!released.last_payout_date.is_empty());
    }
}
