use axum::extract::{Query, State};
use culinary_core::domain::{preferences::ports::PreferencesService, recipe::entities::Recipe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        preferences::validators::SearchFavoritesParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFavoritesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/favorites",
    tag = "me",
    summary = "Saved recipes",
    params(SearchFavoritesParams),
    responses(
        (status = 200, body = GetFavoritesResponse)
    )
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<SearchFavoritesParams>,
) -> Result<Response<GetFavoritesResponse>, ApiError> {
    let favorites = state
        .service
        .search_favorites(identity, params.q)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFavoritesResponse { data: favorites }))
}
