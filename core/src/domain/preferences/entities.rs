use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recipe::{
    entities::Recipe,
    value_objects::{Cuisine, Language, MealType, RecipePreferences},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DietaryFilterOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const AVAILABLE_FILTERS: [DietaryFilterOption; 4] = [
    DietaryFilterOption {
        id: "Non-Vegetarian",
        label: "Non-Veg",
    },
    DietaryFilterOption {
        id: "Vegetarian",
        label: "Vegetarian",
    },
    DietaryFilterOption {
        id: "Vegan",
        label: "Vegan",
    },
    DietaryFilterOption {
        id: "Gluten-Free",
        label: "Gluten-Free",
    },
];

pub fn is_known_filter(id: &str) -> bool {
    AVAILABLE_FILTERS.iter().any(|f| f.id == id)
}

/// Per-user choices that shape recipe generation, plus saved recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserPreferences {
    pub user_id: Uuid,
    pub favorites: Vec<Recipe>,
    pub dietary_filters: Vec<String>,
    pub cuisine: Cuisine,
    pub language: Language,
    pub meal_type: MealType,
    pub updated_at: DateTime<Utc>,
}

impl UserPreferences {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            favorites: Vec::new(),
            dietary_filters: Vec::new(),
            cuisine: Cuisine::default(),
            language: Language::default(),
            meal_type: MealType::default(),
            updated_at: Utc::now(),
        }
    }

    pub fn recipe_preferences(&self) -> RecipePreferences {
        RecipePreferences {
            language: self.language,
            cuisine: self.cuisine,
            meal_type: self.meal_type,
            dietary_filters: self.dietary_filters.clone(),
        }
    }
}

/// Removes the recipe with the same id when saved, appends it otherwise.
pub fn toggle_favorite(favorites: &[Recipe], recipe: Recipe) -> Vec<Recipe> {
    if favorites.iter().any(|f| f.id == recipe.id) {
        favorites
            .iter()
            .filter(|f| f.id != recipe.id)
            .cloned()
            .collect()
    } else {
        let mut next = favorites.to_vec();
        next.push(recipe);
        next
    }
}

pub fn toggle_dietary_filter(filters: &[String], id: &str) -> Vec<String> {
    if filters.iter().any(|f| f == id) {
        filters.iter().filter(|f| *f != id).cloned().collect()
    } else {
        let mut next = filters.to_vec();
        next.push(id.to_string());
        next
    }
}
