use axum::{Json, extract::State};
use culinary_core::domain::shopping_list::{entities::ShoppingList, ports::ShoppingListService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        shopping_list::validators::SaveShoppingListValidator,
    },
};

#[utoipa::path(
    put,
    path = "",
    tag = "shopping-list",
    summary = "Replace the shopping list",
    request_body = SaveShoppingListValidator,
    responses(
        (status = 200, body = ShoppingList)
    )
)]
pub async fn save_shopping_list(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<SaveShoppingListValidator>,
) -> Result<Response<ShoppingList>, ApiError> {
    state
        .service
        .save_shopping_list(identity, payload.items)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
