use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recipe::entities::Ingredient;

/// Quantity given to an item added from a recipe's missing ingredients.
pub const DEFAULT_QUANTITY: &str = "1 unit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    pub user_id: Uuid,
    pub items: Vec<Ingredient>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn replace_items(&mut self, items: Vec<Ingredient>) {
        self.items = items;
        self.updated_at = Utc::now();
    }
}
