use crate::domain::{
    admin::{entities::AppSettings, ports::SettingsRepository},
    common::entities::app_errors::CoreError,
    sync::{entities::ChangeEvent, ports::ChangeNotifier},
};

/// Holds every outbound port; each domain implements its service trait on it.
#[derive(Clone)]
pub struct Service<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> {
    pub user_repository: U,
    pub hasher_repository: H,
    pub token_repository: T,
    pub chef_repository: CH,
    pub chef_application_repository: CA,
    pub booking_repository: B,
    pub shopping_list_repository: SL,
    pub preferences_repository: P,
    pub scan_repository: SC,
    pub feedback_repository: F,
    pub ledger_repository: L,
    pub settings_repository: ST,
    pub llm_client: LLM,
    pub change_notifier: N,
    pub health_check_repository: HC,
}

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
    Service<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
where
    ST: SettingsRepository,
    N: ChangeNotifier,
{
    /// Stored settings, or the defaults when none were ever saved.
    pub(crate) async fn current_settings(&self) -> Result<AppSettings, CoreError> {
        Ok(self
            .settings_repository
            .get_settings()
            .await?
            .unwrap_or_default())
    }

    pub(crate) fn notify(&self, event: ChangeEvent) {
        tracing::debug!(topic = event.topic.as_str(), "publishing change");
        self.change_notifier.publish(event);
    }
}
