use chrono::Utc;

use crate::domain::{
    admin::ports::{LedgerRepository, SettingsRepository},
    authentication::{
        ports::{HasherRepository, TokenRepository},
        value_objects::Identity,
    },
    booking::ports::BookingRepository,
    chef::ports::{ChefApplicationRepository, ChefRepository},
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackRepository,
    health::ports::HealthCheckRepository,
    preferences::{
        entities::{UserPreferences, is_known_filter, toggle_dietary_filter, toggle_favorite},
        ports::{PreferencesRepository, PreferencesService},
        value_objects::UpdatePreferencesInput,
    },
    recipe::{
        entities::Recipe,
        helpers::filter_recipes,
        ports::{LLMClient, ScanRepository},
    },
    shopping_list::ports::ShoppingListRepository,
    sync::ports::ChangeNotifier,
    user::ports::UserRepository,
};

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> PreferencesService
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
    async fn get_preferences(&self, identity: Identity) -> Result<UserPreferences, CoreError> {
        Ok(self
            .preferences_repository
            .get_preferences(identity.id())
            .await?
            .unwrap_or_else(|| UserPreferences::new(identity.id())))
    }

    async fn update_preferences(
        &self,
        identity: Identity,
        input: UpdatePreferencesInput,
    ) -> Result<UserPreferences, CoreError> {
        let mut preferences = self.get_preferences(identity).await?;

        if let Some(cuisine) = input.cuisine {
            preferences.cuisine = cuisine;
        }
        if let Some(language) = input.language {
            preferences.language = language;
        }
        if let Some(meal_type) = input.meal_type {
            preferences.meal_type = meal_type;
        }
        preferences.updated_at = Utc::now();

        self.preferences_repository
            .save_preferences(preferences)
            .await
    }

    async fn toggle_favorite(
        &self,
        identity: Identity,
        recipe: Recipe,
    ) -> Result<UserPreferences, CoreError> {
        if recipe.id.trim().is_empty() {
            return Err(CoreError::Invalid("recipe id is required".to_string()));
        }

        let mut preferences = self.get_preferences(identity).await?;
        preferences.favorites = toggle_favorite(&preferences.favorites, recipe);
        preferences.updated_at = Utc::now();

        self.preferences_repository
            .save_preferences(preferences)
            .await
    }

    async fn toggle_dietary_filter(
        &self,
        identity: Identity,
        filter_id: String,
    ) -> Result<UserPreferences, CoreError> {
        if !is_known_filter(&filter_id) {
            return Err(CoreError::Invalid(format!(
                "unknown dietary filter: {}",
                filter_id
            )));
        }

        let mut preferences = self.get_preferences(identity).await?;
        preferences.dietary_filters = toggle_dietary_filter(&preferences.dietary_filters, &filter_id);
        preferences.updated_at = Utc::now();

        self.preferences_repository
            .save_preferences(preferences)
            .await
    }

    async fn search_favorites(
        &self,
        identity: Identity,
        query: Option<String>,
    ) -> Result<Vec<Recipe>, CoreError> {
        let preferences = self.get_preferences(identity).await?;

        Ok(match query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => filter_recipes(&preferences.favorites, q),
            _ => preferences.favorites,
        })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::services::test_support::mock_service, recipe::helpers::tests::recipe,
        user::entities::Role,
    };

    fn identity() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "cook@example.com".to_string(),
            name: "Cook".to_string(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn unknown_filter_is_rejected() {
        let mut service = mock_service();
        service.preferences_repository.expect_save_preferences().never();

        let result = service
            .toggle_dietary_filter(identity(), "Keto".to_string())
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn first_favorite_starts_from_defaults() {
        let mut service = mock_service();
        service
            .preferences_repository
            .expect_get_preferences()
            .returning(|_| Box::pin(async { Ok(None) }));
        service
            .preferences_repository
            .expect_save_preferences()
            .returning(|p| Box::pin(async move { Ok(p) }));

        let preferences = service
            .toggle_favorite(identity(), recipe("r1", "Poha", &[]))
            .await
            .unwrap();

        assert_eq!(preferences.favorites.len(), 1);
        assert!(preferences.dietary_filters.is_empty());
    }

    #[tokio::test]
    async fn favorites_are_searched_by_title_and_ingredient() {
        let mut service = mock_service();
        let caller = identity();
        let owner = caller.user_id;
        service
            .preferences_repository
            .expect_get_preferences()
            .returning(move |_| {
                let mut preferences = UserPreferences::new(owner);
                preferences.favorites = vec![
                    recipe("r1", "Paneer Tikka", &[("Paneer", true)]),
                    recipe("r2", "Veg Pulao", &[("Basmati rice", true), ("Peas", false)]),
                ];
                Box::pin(async move { Ok(Some(preferences)) })
            });

        let by_title = service
            .search_favorites(caller.clone(), Some("tikka".to_string()))
            .await
            .unwrap();
        let by_ingredient = service
            .search_favorites(caller.clone(), Some("PEAS".to_string()))
            .await
            .unwrap();
        let all = service.search_favorites(caller, None).await.unwrap();

        assert_eq!(by_title.len(), 1);
        assert_eq!(by_ingredient[0].id, "r2");
        assert_eq!(all.len(), 2);
    }
}
