use culinary_core::domain::authentication::value_objects::Identity;

use crate::application::{
    auth::RequiredIdentity,
    http::server::api_entities::{api_error::ApiError, response::Response},
};

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Current identity",
    responses(
        (status = 200, body = Identity),
        (status = 401, description = "No valid session")
    )
)]
pub async fn get_identity(
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Identity>, ApiError> {
    Ok(Response::OK(identity))
}
