use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use tracing::error;

use crate::domain::{
    authentication::ports::HasherRepository, common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2HasherRepository {
    fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!("Failed to hash password: {}", e);
                CoreError::InternalServerError
            })
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            error!("Stored password hash is malformed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_verify_only_the_original_password() {
        let hasher = Argon2HasherRepository::new();
        let hash = hasher.hash_password("paneer-tikka").unwrap();

        assert_ne!(hash, "paneer-tikka");
        assert_eq!(hasher.verify_password("paneer-tikka", &hash), Ok(true));
        assert_eq!(hasher.verify_password("paneer-tikki", &hash), Ok(false));
    }

    #[test]
    fn garbage_hash_is_an_internal_error() {
        let hasher = Argon2HasherRepository::new();

        assert_eq!(
            hasher.verify_password("anything", "not-a-phc-string"),
            Err(CoreError::InternalServerError)
        );
    }
}
