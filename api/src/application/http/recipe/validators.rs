use base64::{Engine as _, engine::general_purpose};
use culinary_core::domain::recipe::value_objects::{ImagePayload, RecipePreferences};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateRecipesValidator {
    /// Base64 photo, optionally as a `data:<mime>;base64,` URL.
    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,
    pub mime_type: Option<String>,
    /// Stored preferences of a signed-in caller apply when omitted.
    pub preferences: Option<RecipePreferences>,
}

/// Decodes a base64 or data-URL image, keeping the declared mime type.
pub fn decode_image(encoded: &str, mime_type: Option<String>) -> Result<ImagePayload, ApiError> {
    let (url_mime, data) = match encoded.strip_prefix("data:") {
        Some(rest) => {
            let (header, data) = rest
                .split_once(',')
                .ok_or_else(|| ApiError::BadRequest("Malformed data URL".to_string()))?;
            let mime = header.strip_suffix(";base64").unwrap_or(header);
            (Some(mime.to_string()), data)
        }
        None => (None, encoded),
    };

    let bytes = general_purpose::STANDARD
        .decode(data.trim())
        .map_err(|_| ApiError::BadRequest("Image is not valid base64".to_string()))?;

    image_payload(bytes, mime_type.or(url_mime))
}

pub fn image_payload(data: Vec<u8>, mime_type: Option<String>) -> Result<ImagePayload, ApiError> {
    if data.is_empty() {
        return Err(ApiError::BadRequest("Image cannot be empty".to_string()));
    }
    if data.len() > MAX_IMAGE_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    let mime_type = mime_type
        .filter(|m| m.starts_with("image/"))
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());

    Ok(ImagePayload { mime_type, data })
}
