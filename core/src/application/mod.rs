use crate::{
    domain::common::{CulinaryConfig, services::Service},
    infrastructure::{
        admin::repositories::{
            ledger_repository::PostgresLedgerRepository,
            settings_repository::PostgresSettingsRepository,
        },
        authentication::{argon2_hasher::Argon2HasherRepository, jwt_token::JwtTokenRepository},
        booking::repositories::booking_repository::PostgresBookingRepository,
        chef::repositories::{
            chef_application_repository::PostgresChefApplicationRepository,
            chef_repository::PostgresChefRepository,
        },
        db::postgres::Postgres,
        feedback::repositories::feedback_repository::PostgresFeedbackRepository,
        health::health_check_repository::PostgresHealthCheckRepository,
        llm::gemini_client::GeminiLLMClient,
        preferences::repositories::preferences_repository::PostgresPreferencesRepository,
        recipe::repositories::scan_repository::PostgresScanRepository,
        shopping_list::repositories::shopping_list_repository::PostgresShoppingListRepository,
        sync::broadcast_notifier::BroadcastChangeNotifier,
        user::repositories::user_repository::PostgresUserRepository,
    },
};

pub type CulinaryService = Service<
    PostgresUserRepository,
    Argon2HasherRepository,
    JwtTokenRepository,
    PostgresChefRepository,
    PostgresChefApplicationRepository,
    PostgresBookingRepository,
    PostgresShoppingListRepository,
    PostgresPreferencesRepository,
    PostgresScanRepository,
    PostgresFeedbackRepository,
    PostgresLedgerRepository,
    PostgresSettingsRepository,
    GeminiLLMClient,
    BroadcastChangeNotifier,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: CulinaryConfig) -> Result<CulinaryService, anyhow::Error> {
    let postgres = Postgres::new(config.database).await?;
    let db = postgres.get_db();

    Ok(Service {
        user_repository: PostgresUserRepository::new(db.clone()),
        hasher_repository: Argon2HasherRepository::new(),
        token_repository: JwtTokenRepository::new(&config.auth),
        chef_repository: PostgresChefRepository::new(db.clone()),
        chef_application_repository: PostgresChefApplicationRepository::new(db.clone()),
        booking_repository: PostgresBookingRepository::new(db.clone()),
        shopping_list_repository: PostgresShoppingListRepository::new(db.clone()),
        preferences_repository: PostgresPreferencesRepository::new(db.clone()),
        scan_repository: PostgresScanRepository::new(db.clone()),
        feedback_repository: PostgresFeedbackRepository::new(db.clone()),
        ledger_repository: PostgresLedgerRepository::new(db.clone()),
        settings_repository: PostgresSettingsRepository::new(db.clone()),
        llm_client: GeminiLLMClient::new(
            config.llm.gemini_api_key,
            config.llm.recipe_model,
            config.llm.chat_model,
        ),
        change_notifier: BroadcastChangeNotifier::new(),
        health_check_repository: PostgresHealthCheckRepository::new(db),
    })
}
