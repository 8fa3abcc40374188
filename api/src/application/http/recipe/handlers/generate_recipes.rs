use axum::extract::State;
use culinary_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GenerateRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        recipe::validators::{GenerateRecipesValidator, decode_image},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipes",
    summary = "Generate recipes from a fridge photo",
    description = "Sends the photo to the model and returns 4 to 6 recipes. Guests may call it; signed-in scans are recorded.",
    request_body = GenerateRecipesValidator,
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 502, description = "Model call failed"),
        (status = 503, description = "Maintenance mode")
    )
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<GenerateRecipesValidator>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let image = decode_image(&payload.image, payload.mime_type)?;

    let recipes = state
        .service
        .generate_recipes(
            identity,
            GenerateRecipesInput {
                image,
                preferences: payload.preferences,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: recipes }))
}
