use culinary_core::domain::booking::entities::{BookingStatus, PaymentStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateBookingValidator {
    pub chef_id: Uuid,
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    pub time: Option<String>,
    #[validate(range(min = 1, max = 500, message = "guests must be between 1 and 500"))]
    pub guests: i32,
    pub event_type: Option<String>,
    #[serde(default)]
    pub meal_types: Vec<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingStatusValidator {
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
}

impl UpdateBookingStatusValidator {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.payment_status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_needs_guests_and_a_date() {
        let payload: CreateBookingValidator = serde_json::from_value(serde_json::json!({
            "chef_id": Uuid::new_v4(),
            "date": "",
            "guests": 0
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("date"));
        assert!(errors.field_errors().contains_key("guests"));
        assert!(payload.meal_types.is_empty());
    }

    #[test]
    fn status_update_needs_one_field() {
        let empty: UpdateBookingStatusValidator = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());

        let paid: UpdateBookingStatusValidator =
            serde_json::from_str(r#"{"payment_status": "Paid"}"#).unwrap();
        assert!(!paid.is_empty());
    }
}
