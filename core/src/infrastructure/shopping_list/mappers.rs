use crate::{
    domain::{common::entities::app_errors::CoreError, shopping_list::entities::ShoppingList},
    entity::shopping_lists,
    infrastructure::preferences::mappers::from_json,
};

impl TryFrom<shopping_lists::Model> for ShoppingList {
    type Error = CoreError;

    fn try_from(model: shopping_lists::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: model.user_id,
            items: from_json(model.items, "shopping list")?,
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

    fn model(items: serde_json::Value) -> shopping_lists::Model {
        shopping_lists::Model {
            user_id: Uuid::new_v4(),
            items,
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn stored_items_are_decoded() {
        let list = ShoppingList::try_from(model(json!([
            {"name": "Milk", "quantity": "1 unit", "is_available": false}
        ])))
        .unwrap();

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].name, "Milk");
    }

    #[test]
    fn corrupt_items_fail_instead_of_reading_empty() {
        assert_eq!(
            ShoppingList::try_from(model(json!("garbage"))),
            Err(CoreError::InternalServerError)
        );
    }
}
