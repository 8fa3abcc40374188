use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, error};

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenRepository},
    common::{AuthConfig, entities::app_errors::CoreError},
    user::entities::User,
};

/// HS256 session tokens signed with a shared secret.
#[derive(Clone)]
pub struct JwtTokenRepository {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl JwtTokenRepository {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_seconds: config.token_ttl_seconds,
        }
    }
}

impl TokenRepository for JwtTokenRepository {
    fn issue(&self, user: &User) -> Result<(String, i64), CoreError> {
        let iat = Utc::now().timestamp();
        let claims = JwtClaim {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            iat,
            exp: iat + self.ttl_seconds,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                error!("Failed to sign token: {}", e);
                CoreError::InternalServerError
            })?;

        Ok((token, self.ttl_seconds))
    }

    fn decode(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected token: {}", e);
                CoreError::InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::Role;

    fn repository(secret: &str, ttl_seconds: i64) -> JwtTokenRepository {
        JwtTokenRepository::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_seconds: ttl_seconds,
        })
    }

    #[test]
    fn issued_token_decodes_to_the_user() {
        let tokens = repository("kitchen-secret", 3600);
        let user = User::new("Meera".to_string(), "meera@example.com".to_string(), Role::Chef);

        let (token, expires_in) = tokens.issue(&user).unwrap();
        let claims = tokens.decode(&token).unwrap();

        assert_eq!(expires_in, 3600);
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.role, Role::Chef);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn foreign_or_expired_tokens_are_rejected() {
        let user = User::new("Meera".to_string(), "meera@example.com".to_string(), Role::User);
        let (foreign, _) = repository("other-secret", 3600).issue(&user).unwrap();
        let (expired, _) = repository("kitchen-secret", -3600).issue(&user).unwrap();

        let tokens = repository("kitchen-secret", 3600);
        assert_eq!(tokens.decode(&foreign), Err(CoreError::InvalidToken));
        assert_eq!(tokens.decode(&expired), Err(CoreError::InvalidToken));
        assert_eq!(tokens.decode("not.a.jwt"), Err(CoreError::InvalidToken));
    }
}
