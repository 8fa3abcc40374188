use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    preferences::{entities::UserPreferences, ports::PreferencesRepository},
};
use crate::entity::user_preferences::{
    ActiveModel as PreferencesActiveModel, Column as PreferencesColumn,
    Entity as PreferencesEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresPreferencesRepository {
    pub db: DatabaseConnection,
}

impl PostgresPreferencesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_json<T: serde::Serialize>(value: &T, what: &str) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to serialize {}: {}", what, e);
        CoreError::InternalServerError
    })
}

impl PreferencesRepository for PostgresPreferencesRepository {
    async fn get_preferences(&self, user_id: Uuid) -> Result<Option<UserPreferences>, CoreError> {
        let preferences = PreferencesEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load preferences: {}", e);
                CoreError::InternalServerError
            })?
            .map(UserPreferences::try_from)
            .transpose()?;

        Ok(preferences)
    }

    async fn save_preferences(
        &self,
        preferences: UserPreferences,
    ) -> Result<UserPreferences, CoreError> {
        PreferencesEntity::insert(PreferencesActiveModel {
            user_id: Set(preferences.user_id),
            favorites: Set(to_json(&preferences.favorites, "favorites")?),
            dietary_filters: Set(to_json(&preferences.dietary_filters, "dietary filters")?),
            cuisine: Set(preferences.cuisine.as_str().to_string()),
            language: Set(preferences.language.as_str().to_string()),
            meal_type: Set(preferences.meal_type.as_str().to_string()),
            updated_at: Set(preferences.updated_at.fixed_offset()),
        })
        .on_conflict(
            OnConflict::column(PreferencesColumn::UserId)
                .update_columns([
                    PreferencesColumn::Favorites,
                    PreferencesColumn::DietaryFilters,
                    PreferencesColumn::Cuisine,
                    PreferencesColumn::Language,
                    PreferencesColumn::MealType,
                    PreferencesColumn::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to save preferences: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(preferences)
    }
}
