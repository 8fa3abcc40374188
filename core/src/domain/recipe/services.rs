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
    preferences::ports::PreferencesRepository,
    recipe::{
        entities::{Recipe, Scan},
        helpers::{assign_missing_ids, build_recipe_prompt, parse_recipes},
        ports::{LLMClient, RecipeService, ScanRepository},
        schema::get_recipe_schema,
        value_objects::{GenerateRecipesInput, GenerationOptions, MealType, RecipePreferences},
    },
    shopping_list::ports::ShoppingListRepository,
    sync::{
        entities::{ChangeEvent, SyncTopic},
        ports::ChangeNotifier,
    },
    user::{entities::UserActivity, ports::UserRepository},
};

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> RecipeService
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
    async fn generate_recipes(
        &self,
        identity: Option<Identity>,
        input: GenerateRecipesInput,
    ) -> Result<Vec<Recipe>, CoreError> {
        let settings = self.current_settings().await?;
        let is_admin = identity.as_ref().is_some_and(|i| i.is_admin());
        if settings.maintenance_mode && !is_admin {
            return Err(CoreError::ServiceUnavailable);
        }

        let preferences = self
            .resolve_preferences(identity.as_ref(), input.preferences)
            .await?;
        let meal_type = preferences.meal_type;
        let prompt = build_recipe_prompt(&preferences);
        let options = GenerationOptions {
            temperature: Some(settings.temperature),
            max_output_tokens: Some(settings.max_tokens),
        };

        let raw = self
            .llm_client
            .generate_with_image(prompt, input.image, get_recipe_schema(), options)
            .await?;

        let recipes = assign_missing_ids(parse_recipes(&raw)?, Utc::now().timestamp_millis());
        tracing::info!(count = recipes.len(), "recipes generated");

        if let Some(identity) = identity
            && let Err(e) = self.record_scan(&identity, recipes.len(), meal_type).await
        {
            tracing::warn!(user_id = %identity.id(), "failed to record scan: {}", e);
        }

        Ok(recipes)
    }
}

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
    Service<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
where
    U: UserRepository,
    P: PreferencesRepository,
    SC: ScanRepository,
    ST: SettingsRepository,
    N: ChangeNotifier,
{
    async fn resolve_preferences(
        &self,
        identity: Option<&Identity>,
        requested: Option<RecipePreferences>,
    ) -> Result<RecipePreferences, CoreError> {
        if let Some(preferences) = requested {
            return Ok(preferences);
        }
        let Some(identity) = identity else {
            return Ok(RecipePreferences::default());
        };

        Ok(self
            .preferences_repository
            .get_preferences(identity.id())
            .await?
            .map(|stored| stored.recipe_preferences())
            .unwrap_or_default())
    }

    async fn record_scan(
        &self,
        identity: &Identity,
        recipe_count: usize,
        meal_type: MealType,
    ) -> Result<(), CoreError> {
        let recipe_count = i32::try_from(recipe_count).unwrap_or(i32::MAX);

        self.scan_repository
            .create_scan(Scan::new(Some(identity.id()), recipe_count, meal_type))
            .await?;
        self.user_repository
            .record_activity(
                identity.id(),
                UserActivity {
                    scans: 1,
                    recipes_generated: recipe_count,
                    ..Default::default()
                },
            )
            .await?;

        self.notify(ChangeEvent::global(SyncTopic::Users));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        admin::entities::AppSettings,
        common::services::test_support::{
            MockService, accept_notifications, default_settings, mock_service,
        },
        preferences::entities::UserPreferences,
        recipe::value_objects::{Cuisine, ImagePayload, Language},
        user::entities::Role,
    };

    const TWO_RECIPES: &str = r#"[
        {"title": "Masala Omelette", "description": "Spiced eggs", "difficulty": "Easy",
         "prep_time": "10 mins", "calories": 320,
         "ingredients": [{"name": "Eggs", "quantity": "3", "is_available": true},
                         {"name": "Green chilli", "quantity": "1", "is_available": false}],
         "instructions": ["Whisk", "Fry"], "dietary_tags": ["Vegetarian"]},
        {"id": "kept", "title": "Tomato Rice", "description": "One pot", "difficulty": "Medium",
         "prep_time": "25 mins", "calories": 410,
         "ingredients": [{"name": "Rice", "quantity": "1 cup", "is_available": true}],
         "instructions": ["Boil", "Mix"]}
    ]"#;

    fn input() -> GenerateRecipesInput {
        GenerateRecipesInput {
            image: ImagePayload {
                mime_type: "image/jpeg".to_string(),
                data: vec![0xff, 0xd8, 0xff],
            },
            preferences: Some(RecipePreferences::default()),
        }
    }

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "cook@example.com".to_string(),
            name: "Cook".to_string(),
            role,
        }
    }

    fn model_answers(service: &mut MockService, answer: &'static str) {
        service
            .llm_client
            .expect_generate_with_image()
            .times(1)
            .returning(move |_, _, _, _| Box::pin(async move { Ok(answer.to_string()) }));
    }

    #[tokio::test]
    async fn guest_scan_is_not_recorded() {
        let mut service = mock_service();
        default_settings(&mut service);
        model_answers(&mut service, TWO_RECIPES);
        service.scan_repository.expect_create_scan().never();
        service.user_repository.expect_record_activity().never();

        let recipes = service.generate_recipes(None, input()).await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert!(recipes[0].id.starts_with("recipe-0-"));
        assert_eq!(recipes[1].id, "kept");
    }

    #[tokio::test]
    async fn signed_in_scan_is_recorded_with_counters() {
        let mut service = mock_service();
        default_settings(&mut service);
        model_answers(&mut service, TWO_RECIPES);
        accept_notifications(&mut service);
        service
            .scan_repository
            .expect_create_scan()
            .times(1)
            .withf(|scan| scan.recipe_count == 2 && scan.user_id.is_some())
            .returning(|scan| Box::pin(async move { Ok(scan) }));
        service
            .user_repository
            .expect_record_activity()
            .times(1)
            .withf(|_, activity| activity.scans == 1 && activity.recipes_generated == 2)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let recipes = service
            .generate_recipes(Some(identity(Role::User)), input())
            .await
            .unwrap();

        assert_eq!(recipes.len(), 2);
    }

    #[tokio::test]
    async fn failed_scan_recording_does_not_fail_the_request() {
        let mut service = mock_service();
        default_settings(&mut service);
        model_answers(&mut service, TWO_RECIPES);
        service
            .scan_repository
            .expect_create_scan()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let result = service
            .generate_recipes(Some(identity(Role::User)), input())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn malformed_model_output_is_an_external_error() {
        let mut service = mock_service();
        default_settings(&mut service);
        model_answers(&mut service, "{not json");

        let result = service.generate_recipes(None, input()).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn maintenance_mode_turns_away_everyone_but_admins() {
        let mut service = mock_service();
        service.settings_repository.expect_get_settings().returning(|| {
            Box::pin(async {
                Ok(Some(AppSettings {
                    maintenance_mode: true,
                    ..AppSettings::default()
                }))
            })
        });
        model_answers(&mut service, "");
        service
            .scan_repository
            .expect_create_scan()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let guest = service.generate_recipes(None, input()).await;
        assert_eq!(guest, Err(CoreError::ServiceUnavailable));

        let admin = service
            .generate_recipes(Some(identity(Role::Admin)), input())
            .await;
        assert_eq!(admin, Ok(vec![]));
    }

    #[tokio::test]
    async fn stored_preferences_apply_when_none_are_sent() {
        let mut service = mock_service();
        let caller = identity(Role::User);
        let mut stored = UserPreferences::new(caller.id());
        stored.cuisine = Cuisine::ALL[1];
        stored.language = Language::ALL[1];
        stored.dietary_filters = vec!["Vegan".to_string()];
        let expected = stored.recipe_preferences();
        default_settings(&mut service);
        accept_notifications(&mut service);
        service
            .preferences_repository
            .expect_get_preferences()
            .times(1)
            .returning(move |_| {
                let stored = stored.clone();
                Box::pin(async move { Ok(Some(stored)) })
            });
        service
            .llm_client
            .expect_generate_with_image()
            .times(1)
            .withf(move |prompt, _, _, _| {
                *prompt == build_recipe_prompt(&expected) && prompt.contains("Vegan")
            })
            .returning(|_, _, _, _| Box::pin(async { Ok("[]".to_string()) }));
        service
            .scan_repository
            .expect_create_scan()
            .returning(|scan| Box::pin(async move { Ok(scan) }));
        service
            .user_repository
            .expect_record_activity()
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let recipes = service
            .generate_recipes(
                Some(caller),
                GenerateRecipesInput {
                    preferences: None,
                    ..input()
                },
            )
            .await;

        assert_eq!(recipes, Ok(vec![]));
    }

    #[tokio::test]
    async fn guests_without_preferences_get_the_defaults() {
        let mut service = mock_service();
        default_settings(&mut service);
        service.preferences_repository.expect_get_preferences().never();
        service
            .llm_client
            .expect_generate_with_image()
            .withf(|prompt, _, _, _| *prompt == build_recipe_prompt(&RecipePreferences::default()))
            .returning(|_, _, _, _| Box::pin(async { Ok("[]".to_string()) }));

        let recipes = service
            .generate_recipes(
                None,
                GenerateRecipesInput {
                    preferences: None,
                    ..input()
                },
            )
            .await;

        assert_eq!(recipes, Ok(vec![]));
    }
}
