use culinary_core::domain::recipe::{
    entities::{Ingredient, Recipe},
    helpers::missing_ingredients,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveShoppingListValidator {
    pub items: Vec<Ingredient>,
}

/// Either explicit names, a recipe whose unavailable ingredients are wanted, or both.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AddMissingItemsValidator {
    #[serde(default)]
    pub names: Vec<String>,
    pub recipe: Option<Recipe>,
}

impl AddMissingItemsValidator {
    pub fn into_names(self) -> Vec<String> {
        let mut names = self.names;
        if let Some(recipe) = &self.recipe {
            names.extend(missing_ingredients(recipe));
        }
        names
    }
}
