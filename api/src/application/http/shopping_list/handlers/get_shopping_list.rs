use axum::extract::State;
use culinary_core::domain::shopping_list::{entities::ShoppingList, ports::ShoppingListService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "shopping-list",
    summary = "Current shopping list",
    responses(
        (status = 200, body = ShoppingList)
    )
)]
pub async fn get_shopping_list(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ShoppingList>, ApiError> {
    state
        .service
        .get_shopping_list(identity)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
