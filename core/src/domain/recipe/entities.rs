use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, recipe::value_objects::MealType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    /// `true` when seen in the photo, `false` when it has to be bought.
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BeveragePairing {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub prep_time: String,
    pub calories: i32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beverage_pairing: Option<BeveragePairing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chefs_secret: Option<String>,
}

/// One fridge analysis, kept for usage statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Scan {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub recipe_count: i32,
    pub meal_type: MealType,
    pub created_at: DateTime<Utc>,
}

impl Scan {
    pub fn new(user_id: Option<Uuid>, recipe_count: i32, meal_type: MealType) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            recipe_count,
            meal_type,
            created_at: now,
        }
    }
}
