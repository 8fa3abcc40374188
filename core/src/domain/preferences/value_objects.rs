use crate::domain::recipe::value_objects::{Cuisine, Language, MealType};

pub struct UpdatePreferencesInput {
    pub cuisine: Option<Cuisine>,
    pub language: Option<Language>,
    pub meal_type: Option<MealType>,
}
