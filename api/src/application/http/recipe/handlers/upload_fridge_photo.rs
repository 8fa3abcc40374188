use axum::extract::{Multipart, State};
use culinary_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{GenerateRecipesInput, RecipePreferences},
};

use crate::application::{
    auth::OptionalIdentity,
    http::{
        recipe::{
            handlers::generate_recipes::GenerateRecipesResponse, validators::image_payload,
        },
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/generate/upload",
    tag = "recipes",
    summary = "Generate recipes from an uploaded photo",
    description = "Multipart variant: an `image` file part and an optional `preferences` JSON part.",
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 400, description = "Missing or oversized image")
    )
)]
pub async fn upload_fridge_photo(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    mut multipart: Multipart,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let mut image = None;
    let mut preferences = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field.content_type().map(|m| m.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                image = Some(image_payload(data.to_vec(), mime_type)?);
            }
            "preferences" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read preferences: {}", e))
                })?;
                let parsed: RecipePreferences = serde_json::from_str(&value)
                    .map_err(|e| ApiError::BadRequest(format!("Invalid preferences: {}", e)))?;
                preferences = Some(parsed);
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let recipes = state
        .service
        .generate_recipes(identity, GenerateRecipesInput { image, preferences })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: recipes }))
}
