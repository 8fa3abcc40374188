use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    preferences::{entities::UserPreferences, value_objects::UpdatePreferencesInput},
    recipe::entities::Recipe,
};

#[cfg_attr(test, mockall::automock)]
pub trait PreferencesRepository: Send + Sync {
    fn get_preferences(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserPreferences>, CoreError>> + Send;

    fn save_preferences(
        &self,
        preferences: UserPreferences,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PreferencesService: Send + Sync {
    fn get_preferences(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;

    fn update_preferences(
        &self,
        identity: Identity,
        input: UpdatePreferencesInput,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;

    fn toggle_favorite(
        &self,
        identity: Identity,
        recipe: Recipe,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;

    fn toggle_dietary_filter(
        &self,
        identity: Identity,
        filter_id: String,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;

    /// Saved recipes whose title or ingredients contain `query`.
    fn search_favorites(
        &self,
        identity: Identity,
        query: Option<String>,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
