use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    recipe::entities::Ingredient, shopping_list::entities::ShoppingList,
};

#[cfg_attr(test, mockall::automock)]
pub trait ShoppingListRepository: Send + Sync {
    fn get_list(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ShoppingList>, CoreError>> + Send;

    /// Inserts or replaces the user's list.
    fn save_list(
        &self,
        list: ShoppingList,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ShoppingListService: Send + Sync {
    fn get_shopping_list(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn save_shopping_list(
        &self,
        identity: Identity,
        items: Vec<Ingredient>,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn add_missing_items(
        &self,
        identity: Identity,
        names: Vec<String>,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn remove_item(
        &self,
        identity: Identity,
        index: usize,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;
}
