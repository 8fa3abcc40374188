use serde::de::DeserializeOwned;
use tracing::error;

use crate::{
    domain::{common::entities::app_errors::CoreError, preferences::entities::UserPreferences},
    entity::user_preferences,
};

/// A column that no longer decodes is an error; reading it as empty would let
/// the next save overwrite the stored data.
pub(crate) fn from_json<T: DeserializeOwned>(
    value: serde_json::Value,
    what: &str,
) -> Result<T, CoreError> {
    serde_json::from_value(value).map_err(|e| {
        error!("Failed to decode stored {}: {}", what, e);
        CoreError::InternalServerError
    })
}

impl TryFrom<user_preferences::Model> for UserPreferences {
    type Error = CoreError;

    fn try_from(model: user_preferences::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: model.user_id,
            favorites: from_json(model.favorites, "favorites")?,
            dietary_filters: from_json(model.dietary_filters, "dietary filters")?,
            cuisine: model.cuisine.as_str().into(),
            language: model.language.as_str().into(),
            meal_type: model.meal_type.as_str().into(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn model(favorites: serde_json::Value) -> user_preferences::Model {
        user_preferences::Model {
            user_id: Uuid::new_v4(),
            favorites,
            dietary_filters: json!(["Vegan"]),
            cuisine: "Any".to_string(),
            language: "English".to_string(),
            meal_type: "Any".to_string(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn stored_row_maps_to_preferences() {
        let preferences = UserPreferences::try_from(model(json!([]))).unwrap();

        assert!(preferences.favorites.is_empty());
        assert_eq!(preferences.dietary_filters, vec!["Vegan".to_string()]);
    }

    #[test]
    fn undecodable_favorites_are_an_error_not_an_empty_list() {
        let result = UserPreferences::try_from(model(json!({"not": "a list"})));

        assert_eq!(result, Err(CoreError::InternalServerError));
    }
}
