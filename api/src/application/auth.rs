use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use culinary_core::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{AuthorizeRequestInput, Identity},
    },
    common::entities::app_errors::CoreError,
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Query parameter accepted in place of the header, for clients such as
/// `EventSource` that cannot set one.
const TOKEN_QUERY_PARAM: &str = "access_token";

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Option<String> {
    if let Ok(TypedHeader(Authorization(bearer))) =
        parts.extract::<TypedHeader<Authorization<Bearer>>>().await
    {
        return Some(bearer.token().to_string());
    }

    token_from_query(parts.uri.query())
}

fn token_from_query(query: Option<&str>) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == TOKEN_QUERY_PARAM)
        .map(|(_, value)| value.to_string())
        .filter(|token| !token.is_empty())
}

/// Resolves the caller when a token is present.
///
/// Requests without a token pass through anonymously; invalid tokens are
/// treated the same way so that public routes keep working, except for
/// blocked accounts which are turned away outright.
pub async fn auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();
    let token = extract_token_from_bearer(&mut parts).await;
    let mut req = Request::from_parts(parts, body);

    if let Some(token) = token {
        match state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
        {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
            }
            Err(e @ CoreError::Forbidden(_)) => return ApiError::from(e).into_response(),
            Err(e) => debug!("ignoring unusable token: {}", e),
        }
    }

    next.run(req).await
}

/// Caller that must be signed in.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}

/// Caller that may be a guest.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request as HttpRequest;
    use culinary_core::domain::user::entities::Role;
    use uuid::Uuid;

    use super::*;

    fn parts(uri: &str, authorization: Option<&str>) -> Parts {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn header_wins_over_query() {
        let mut p = parts("/sync/chefs?access_token=query", Some("Bearer header"));
        assert_eq!(extract_token_from_bearer(&mut p).await, Some("header".to_string()));
    }

    #[tokio::test]
    async fn query_token_is_a_fallback() {
        let mut p = parts("/sync/chefs?x=1&access_token=query", None);
        assert_eq!(extract_token_from_bearer(&mut p).await, Some("query".to_string()));

        let mut p = parts("/sync/chefs?access_token=", None);
        assert_eq!(extract_token_from_bearer(&mut p).await, None);
    }

    #[tokio::test]
    async fn required_identity_rejects_guests() {
        let mut p = parts("/me", None);
        let result = RequiredIdentity::from_request_parts(&mut p, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));

        let identity = Identity {
            user_id: Uuid::new_v4(),
            email: "a@example.com".to_string(),
            name: "A".to_string(),
            role: Role::User,
        };
        p.extensions.insert(identity.clone());
        let RequiredIdentity(found) = RequiredIdentity::from_request_parts(&mut p, &())
            .await
            .unwrap();
        assert_eq!(found, identity);
    }
}
