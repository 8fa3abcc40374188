use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
    German,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Spanish,
        Language::French,
        Language::German,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Cuisine {
    #[default]
    Global,
    Indian,
    Italian,
    Mexican,
    Asian,
    American,
    Mediterranean,
    Spanish,
}

impl Cuisine {
    pub const ALL: [Cuisine; 8] = [
        Cuisine::Global,
        Cuisine::Indian,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Asian,
        Cuisine::American,
        Cuisine::Mediterranean,
        Cuisine::Spanish,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Cuisine::Global => "Global",
            Cuisine::Indian => "Indian",
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Asian => "Asian",
            Cuisine::American => "American",
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::Spanish => "Spanish",
        }
    }
}

impl From<&str> for Cuisine {
    fn from(s: &str) -> Self {
        Cuisine::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MealType {
    #[default]
    Any,
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
}

impl MealType {
    pub const ALL: [MealType; 6] = [
        MealType::Any,
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
        MealType::Dessert,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            MealType::Any => "Any",
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
            MealType::Dessert => "Dessert",
        }
    }
}

impl From<&str> for MealType {
    fn from(s: &str) -> Self {
        MealType::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RecipePreferences {
    pub language: Language,
    pub cuisine: Cuisine,
    pub meal_type: MealType,
    pub dietary_filters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Sampling knobs forwarded to the model, sourced from the global settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationOptions {
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub image: ImagePayload,
    /// `None` falls back to the caller's stored preferences, or the defaults for guests.
    pub preferences: Option<RecipePreferences>,
}
