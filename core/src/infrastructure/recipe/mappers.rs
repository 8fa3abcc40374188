use crate::{domain::recipe::entities::Scan, entity::scans};

impl From<scans::Model> for Scan {
    fn from(model: scans::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            recipe_count: model.recipe_count,
            meal_type: model.meal_type.as_str().into(),
            created_at: model.created_at.to_utc(),
        }
    }
}
