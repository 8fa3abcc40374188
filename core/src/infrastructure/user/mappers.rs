use crate::{domain::user::entities::User, entity::users};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            email: model.email.clone(),
            join_date: model.join_date.clone(),
            scans: model.scans,
            recipes_generated: model.recipes_generated,
            grocery_purchases: model.grocery_purchases,
            bookings: model.bookings,
            cuisine: model.cuisine.clone(),
            diet: serde_json::from_value(model.diet.clone()).unwrap_or_default(),
            last_active: model.last_active.to_utc(),
            status: model.status.as_str().into(),
            role: model.role.as_str().into(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}
