use axum::extract::State;
use culinary_core::domain::{
    admin::ports::AdminService,
    preferences::{AVAILABLE_FILTERS, DietaryFilterOption},
    recipe::value_objects::{Cuisine, Language, MealType},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// What a client needs before rendering its first screen.
#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ClientConfig {
    pub app_name: String,
    pub maintenance_mode: bool,
    pub languages: Vec<Language>,
    pub cuisines: Vec<Cuisine>,
    pub meal_types: Vec<MealType>,
    pub dietary_filters: Vec<DietaryFilterOption>,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Client bootstrap configuration",
    responses(
        (status = 200, body = ClientConfig)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Result<Response<ClientConfig>, ApiError> {
    let settings = state.service.get_settings().await.map_err(ApiError::from)?;

    Ok(Response::OK(ClientConfig {
        app_name: settings.app_name,
        maintenance_mode: settings.maintenance_mode,
        languages: Language::ALL.to_vec(),
        cuisines: Cuisine::ALL.to_vec(),
        meal_types: MealType::ALL.to_vec(),
        dietary_filters: AVAILABLE_FILTERS.to_vec(),
    }))
}
