use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::error;

use crate::domain::{
    admin::{entities::AppSettings, ports::SettingsRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::app_settings::{
    ActiveModel as SettingsActiveModel, Column as SettingsColumn, Entity as SettingsEntity,
};

/// Key of the single settings document.
const GLOBAL_SETTINGS_ID: &str = "global";

#[derive(Debug, Clone)]
pub struct PostgresSettingsRepository {
    pub db: DatabaseConnection,
}

impl PostgresSettingsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SettingsRepository for PostgresSettingsRepository {
    async fn get_settings(&self) -> Result<Option<AppSettings>, CoreError> {
        let model = SettingsEntity::find_by_id(GLOBAL_SETTINGS_ID.to_string())
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load settings: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        serde_json::from_value(model.data).map(Some).map_err(|e| {
            error!("Stored settings are malformed: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn save_settings(&self, settings: AppSettings) -> Result<AppSettings, CoreError> {
        let data = serde_json::to_value(&settings).map_err(|e| {
            error!("Failed to serialize settings: {}", e);
            CoreError::InternalServerError
        })?;

        SettingsEntity::insert(SettingsActiveModel {
            id: Set(GLOBAL_SETTINGS_ID.to_string()),
            data: Set(data),
            updated_at: Set(Utc::now().fixed_offset()),
        })
        .on_conflict(
            OnConflict::column(SettingsColumn::Id)
                .update_columns([SettingsColumn::Data, SettingsColumn::UpdatedAt])
                .to_owned(),
        )
        .exec(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to save settings: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(settings)
    }
}
