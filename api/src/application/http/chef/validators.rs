use culinary_core::domain::chef::entities::ChefStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateChefProfileValidator {
    pub mobile: Option<String>,
    pub speciality: Option<String>,
    #[validate(range(min = 1, max = 1_000_000, message = "hourly_rate must be between 1 and 1000000"))]
    pub hourly_rate: Option<i64>,
    pub image: Option<String>,
    pub badges: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetChefStatusValidator {
    pub status: ChefStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ApplyAsChefValidator {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "specialty is required"))]
    pub specialty: String,
    #[validate(range(min = 0, max = 80, message = "years_experience must be between 0 and 80"))]
    pub years_experience: i32,
    /// Base64 encoded resume.
    pub resume_data: Option<String>,
    pub resume_name: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct ApproveApplicationValidator {
    /// Defaults to 1500 when omitted.
    #[validate(range(min = 1, max = 1_000_000, message = "hourly_rate must be between 1 and 1000000"))]
    pub hourly_rate: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(years_experience: i32) -> ApplyAsChefValidator {
        ApplyAsChefValidator {
            first_name: "Ravi".to_string(),
            last_name: "Menon".to_string(),
            email: "ravi@example.com".to_string(),
            specialty: "Kerala".to_string(),
            years_experience,
            resume_data: None,
            resume_name: None,
        }
    }

    #[test]
    fn experience_must_be_plausible() {
        assert!(application(7).validate().is_ok());
        assert!(application(-1).validate().is_err());
        assert!(application(81).validate().is_err());
    }

    #[test]
    fn rates_must_be_positive_when_given() {
        assert!(ApproveApplicationValidator::default().validate().is_ok());
        assert!(
            ApproveApplicationValidator {
                hourly_rate: Some(0)
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn rates_are_capped() {
        let rate = |hourly_rate| UpdateChefProfileValidator {
            mobile: None,
            speciality: None,
            hourly_rate: Some(hourly_rate),
            image: None,
            badges: None,
        };

        assert!(rate(1_000_000).validate().is_ok());
        assert!(rate(1_000_001).validate().is_err());
        assert!(rate(i64::MAX).validate().is_err());
        assert!(
            ApproveApplicationValidator {
                hourly_rate: Some(i64::MAX)
            }
            .validate()
            .is_err()
        );
    }
}
