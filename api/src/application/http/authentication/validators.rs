use culinary_core::domain::user::entities::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SignUpValidator {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Length rules are enforced by the service so the message stays consistent.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// `user` or `chef`; defaults to `user`.
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SignInValidator {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_requires_a_real_email() {
        let payload = SignUpValidator {
            name: "Asha".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
            role: None,
        };

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn short_passwords_are_left_to_the_service() {
        let payload = SignUpValidator {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "abc".to_string(),
            role: Some(Role::Chef),
        };

        assert!(payload.validate().is_ok());
    }
}
