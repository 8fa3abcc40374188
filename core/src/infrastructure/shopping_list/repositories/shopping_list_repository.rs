use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    shopping_list::{entities::ShoppingList, ports::ShoppingListRepository},
};
use crate::entity::shopping_lists::{
    ActiveModel as ShoppingListActiveModel, Column as ShoppingListColumn,
    Entity as ShoppingListEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresShoppingListRepository {
    pub db: DatabaseConnection,
}

impl PostgresShoppingListRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ShoppingListRepository for PostgresShoppingListRepository {
    async fn get_list(&self, user_id: Uuid) -> Result<Option<ShoppingList>, CoreError> {
        let list = ShoppingListEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load shopping list: {}", e);
                CoreError::InternalServerError
            })?
            .map(ShoppingList::try_from)
            .transpose()?;

        Ok(list)
    }

    async fn save_list(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        let items = serde_json::to_value(&list.items).map_err(|e| {
            error!("Failed to serialize shopping list: {}", e);
            CoreError::InternalServerError
        })?;

        ShoppingListEntity::insert(ShoppingListActiveModel {
            user_id: Set(list.user_id),
            items: Set(items),
            updated_at: Set(list.updated_at.fixed_offset()),
        })
        .on_conflict(
            OnConflict::column(ShoppingListColumn::UserId)
                .update_columns([ShoppingListColumn::Items, ShoppingListColumn::UpdatedAt])
                .to_owned(),
        )
        .exec(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to save shopping list: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(list)
    }
}
