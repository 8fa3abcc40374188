use axum::{Json, extract::State};
use culinary_core::domain::shopping_list::{entities::ShoppingList, ports::ShoppingListService};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        shopping_list::validators::AddMissingItemsValidator,
    },
};

#[utoipa::path(
    post,
    path = "/missing",
    tag = "shopping-list",
    summary = "Add missing ingredients",
    description = "Appends each name not already on the list with quantity \"1 unit\".",
    request_body = AddMissingItemsValidator,
    responses(
        (status = 200, body = ShoppingList)
    )
)]
pub async fn add_missing_items(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<AddMissingItemsValidator>,
) -> Result<Response<ShoppingList>, ApiError> {
    state
        .service
        .add_missing_items(identity, payload.into_names())
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
