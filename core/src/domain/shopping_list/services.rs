use crate::domain::{
    admin::ports::{LedgerRepository, SettingsRepository},
    authentication::{
        ports::{HasherRepository, TokenRepository},
        value_objects::Identity,
    },
    booking::ports::BookingRepository,
    chef::ports::{ChefApplicationRepository, ChefRepository},
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackRepository,
    health::ports::HealthCheckRepository,
    preferences::ports::PreferencesRepository,
    recipe::{
        entities::Ingredient,
        ports::{LLMClient, ScanRepository},
    },
    shopping_list::{
        entities::ShoppingList,
        helpers::{merge_missing, remove_item},
        ports::{ShoppingListRepository, ShoppingListService},
    },
    sync::{
        entities::{ChangeEvent, SyncTopic},
        ports::ChangeNotifier,
    },
    user::ports::UserRepository,
};

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC> ShoppingListService
    for Service<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
where
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
    CH: ChefRepository,
    CA: ChefApplicationRepository,
    B: BookingRepository,
    SL: ShoppingListRepository,
    P: PreferencesRepository,
    SC: ScanRepository,
    F: FeedbackRepository,
    L: LedgerRepository,
    ST: SettingsRepository,
    LLM: LLMClient,
    N: ChangeNotifier,
    HC: HealthCheckRepository,
{
    async fn get_shopping_list(&self, identity: Identity) -> Result<ShoppingList, CoreError> {
        Ok(self
            .shopping_list_repository
            .get_list(identity.id())
            .await?
            .unwrap_or_else(|| ShoppingList::empty(identity.id())))
    }

    async fn save_shopping_list(
        &self,
        identity: Identity,
        items: Vec<Ingredient>,
    ) -> Result<ShoppingList, CoreError> {
        let mut list = self.get_shopping_list(identity.clone()).await?;
        list.replace_items(items);

        self.store(list).await
    }

    async fn add_missing_items(
        &self,
        identity: Identity,
        names: Vec<String>,
    ) -> Result<ShoppingList, CoreError> {
        let mut list = self.get_shopping_list(identity.clone()).await?;
        let merged = merge_missing(&list.items, &names);
        if merged.len() == list.items.len() {
            return Ok(list);
        }
        list.replace_items(merged);

        self.store(list).await
    }

    async fn remove_item(&self, identity: Identity, index: usize) -> Result<ShoppingList, CoreError> {
        let mut list = self.get_shopping_list(identity.clone()).await?;
        if index >= list.items.len() {
            return Ok(list);
        }
        list.replace_items(remove_item(&list.items, index));

        self.store(list).await
    }
}

impl<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
    Service<U, H, T, CH, CA, B, SL, P, SC, F, L, ST, LLM, N, HC>
where
    SL: ShoppingListRepository,
    ST: SettingsRepository,
    N: ChangeNotifier,
{
    async fn store(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        let list = self.shopping_list_repository.save_list(list).await?;
        self.notify(ChangeEvent::owned(SyncTopic::ShoppingList, vec![list.user_id]));

        Ok(list)
    }
}
