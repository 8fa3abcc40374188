use crate::domain::{
    admin::ports::{LedgerRepository, SettingsRepository},
    authentication::ports::{HasherRepository, TokenRepository},
    booking::ports::BookingRepository,
    chef::ports::{ChefApplicationRepository, ChefRepository},
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    preferences::ports::PreferencesRepository,
    recipe::ports::{LLMClient, ScanRepository},
    shopping_list::ports::ShoppingListRepository,
    sync::ports::ChangeNotifier,
    user::ports::UserRepository,
};

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> HealthCheckService
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
