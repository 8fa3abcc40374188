use culinary_core::domain::recipe::value_objects::{Cuisine, Language, MealType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePreferencesValidator {
    pub cuisine: Option<Cuisine>,
    pub language: Option<Language>,
    pub meal_type: Option<MealType>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchFavoritesParams {
    /// Matches recipe titles and ingredient names, case-insensitively.
    pub q: Option<String>,
}
