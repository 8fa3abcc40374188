use axum::extract::{Path, State};
use culinary_core::domain::shopping_list::{entities::ShoppingList, ports::ShoppingListService};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/items/{index}",
    tag = "shopping-list",
    summary = "Remove one item by position",
    params(
        ("index" = usize, Path, description = "Zero-based position; out of range is a no-op"),
    ),
    responses(
        (status = 200, body = ShoppingList)
    )
)]
pub async fn remove_item(
    Path(index): Path<usize>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ShoppingList>, ApiError> {
    state
        .service
        .remove_item(identity, index)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
