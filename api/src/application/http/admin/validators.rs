use culinary_core::domain::{
    admin::entities::{TransactionStatus, TransactionType},
    user::entities::{Role, UserStatus},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserValidator {
    pub status: Option<UserStatus>,
    pub role: Option<Role>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecordTransactionValidator {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[validate(length(min = 1, message = "party is required"))]
    pub party: String,
    /// Negative for money leaving the platform.
    pub amount: i64,
    pub status: TransactionStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePayoutValidator {
    #[validate(length(min = 1, message = "chef_name is required"))]
    pub chef_name: String,
    #[validate(range(min = 1, message = "amount must be positive"))]
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_uses_display_names() {
        let payload: RecordTransactionValidator = serde_json::from_str(
            r#"{"type": "Booking Commission", "party": "Chef Arjun", "amount": 1100, "status": "Completed"}"#,
        )
        .unwrap();

        assert_eq!(payload.kind, TransactionType::BookingCommission);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn payouts_must_be_positive() {
        let payout = CreatePayoutValidator {
            chef_name: "Arjun".to_string(),
            amount: 0,
        };
        assert!(payout.validate().is_err());
    }
}
