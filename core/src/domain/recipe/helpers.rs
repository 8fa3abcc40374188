use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{MealType, RecipePreferences},
    },
};

/// Builds the instruction sent along with the fridge photo
pub fn build_recipe_prompt(preferences: &RecipePreferences) -> String {
    let meal = match preferences.meal_type {
        MealType::Any => "meal".to_string(),
        other => other.as_str().to_lowercase(),
    };
    let filters = if preferences.dietary_filters.is_empty() {
        "none".to_string()
    } else {
        preferences.dietary_filters.join(", ")
    };
    let cuisine = preferences.cuisine.as_str();
    let language = preferences.language.as_str();

    format!(
        "You are looking at a photo of a refrigerator or of raw food ingredients.\n\
         The cook wants to prepare a {meal} in {cuisine} style and reads {language}.\n\
         1. List the ingredients you can see.\n\
         2. Propose between 4 and 6 {cuisine} recipes that use them.\n\
         3. Respect these dietary filters without exception: {filters}.\n\
         4. For every recipe list every ingredient it needs and mark whether it is visible in the photo.\n\
         5. Write short step-by-step instructions in {language}.\n\
         6. Add a video search query, a beverage pairing and one chef's tip per recipe.\n\
         Answer with JSON only."
    )
}

/// Parses the model output into recipes. Blank output means no recipes.
pub fn parse_recipes(raw: &str) -> Result<Vec<Recipe>, CoreError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str::<Vec<Recipe>>(raw).map_err(|e| {
        tracing::error!("Invalid recipes format: {}", e);
        CoreError::ExternalServiceError(format!("Invalid recipes format: {}", e))
    })
}

/// Gives every recipe without an id a local one: `recipe-{index}-{unix_millis}`.
pub fn assign_missing_ids(recipes: Vec<Recipe>, now_millis: i64) -> Vec<Recipe> {
    recipes
        .into_iter()
        .enumerate()
        .map(|(idx, mut recipe)| {
            if recipe.id.trim().is_empty() {
                recipe.id = format!("recipe-{}-{}", idx, now_millis);
            }
            recipe
        })
        .collect()
}

/// Case-insensitive match on the title or on any ingredient name.
pub fn filter_recipes(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    let query = query.to_lowercase();

    recipes
        .iter()
        .filter(|recipe| {
            recipe.title.to_lowercase().contains(&query)
                || recipe
                    .ingredients
                    .iter()
                    .any(|ing| ing.name.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Names of the ingredients that still have to be bought.
pub fn missing_ingredients(recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredients
        .iter()
        .filter(|ing| !ing.is_available)
        .map(|ing| ing.name.clone())
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::recipe::{
        entities::{Difficulty, Ingredient},
        value_objects::{Cuisine, Language},
    };

    pub(crate) fn recipe(id: &str, title: &str, ingredients: &[(&str, bool)]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            description: "tasty".to_string(),
            difficulty: Difficulty::Easy,
            prep_time: "15 mins".to_string(),
            calories: 420,
            ingredients: ingredients
                .iter()
                .map(|(name, available)| Ingredient {
                    name: name.to_string(),
                    quantity: "1".to_string(),
                    is_available: *available,
                })
                .collect(),
            instructions: vec!["Cook it".to_string()],
            dietary_tags: vec![],
            cuisine: None,
            youtube_query: None,
            beverage_pairing: None,
            chefs_secret: None,
        }
    }

    #[test]
    fn prompt_mentions_preferences() {
        let prompt = build_recipe_prompt(&RecipePreferences {
            language: Language::Hindi,
            cuisine: Cuisine::Italian,
            meal_type: MealType::Dinner,
            dietary_filters: vec!["Vegan".to_string(), "Gluten-Free".to_string()],
        });

        assert!(prompt.contains("prepare a dinner in Italian style"));
        assert!(prompt.contains("reads Hindi"));
        assert!(prompt.contains("Vegan, Gluten-Free"));
    }

    #[test]
    fn any_meal_type_is_rendered_as_meal() {
        let prompt = build_recipe_prompt(&RecipePreferences::default());
        assert!(prompt.contains("prepare a meal in Global style"));
        assert!(prompt.contains("dietary filters without exception: none"));
    }

    #[test]
    fn missing_ids_are_generated_and_existing_ones_kept() {
        let recipes = vec![
            recipe("", "Omelette", &[]),
            recipe("kept", "Salad", &[]),
            recipe("  ", "Soup", &[]),
        ];

        let recipes = assign_missing_ids(recipes, 1_700_000_000_000);

        assert_eq!(recipes[0].id, "recipe-0-1700000000000");
        assert_eq!(recipes[1].id, "kept");
        assert_eq!(recipes[2].id, "recipe-2-1700000000000");
    }

    #[test]
    fn parse_accepts_model_output_without_optional_fields() {
        let raw = r#"[{
            "title": "Shakshuka",
            "description": "Eggs poached in tomato sauce",
            "difficulty": "Medium",
            "prep_time": "25 mins",
            "calories": 380,
            "ingredients": [{"name": "Eggs", "quantity": "4", "is_available": true}],
            "instructions": ["Simmer sauce", "Crack eggs"],
            "dietary_tags": ["Vegetarian"]
        }]"#;

        let recipes = parse_recipes(raw).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "");
        assert_eq!(recipes[0].difficulty, Difficulty::Medium);
        assert!(recipes[0].beverage_pairing.is_none());
    }

    #[test]
    fn parse_treats_blank_output_as_no_recipes() {
        assert_eq!(parse_recipes("  ").unwrap(), Vec::<Recipe>::new());
    }

    #[test]
    fn parse_rejects_malformed_output() {
        let err = parse_recipes("{\"dishes\": []}").unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[test]
    fn search_matches_title_or_ingredient_ignoring_case() {
        let recipes = vec![
            recipe("1", "Paneer Tikka", &[("Paneer", true)]),
            recipe("2", "Tomato Soup", &[("Basil", false)]),
            recipe("3", "Fried Rice", &[("Rice", true)]),
        ];

        let by_title: Vec<_> = filter_recipes(&recipes, "SOUP")
            .into_iter()
            .map(|r| r.id)
            .collect();
        let by_ingredient: Vec<_> = filter_recipes(&recipes, "basil")
            .into_iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(by_title, vec!["2"]);
        assert_eq!(by_ingredient, vec!["2"]);
        assert_eq!(filter_recipes(&recipes, "").len(), 3);
    }

    #[test]
    fn missing_ingredients_are_the_unavailable_ones() {
        let r = recipe("1", "Pasta", &[("Pasta", true), ("Cream", false), ("Garlic", false)]);
        assert_eq!(missing_ingredients(&r), vec!["Cream", "Garlic"]);
    }
}
