use uuid::Uuid;

use crate::domain::booking::entities::{BookingStatus, PaymentStatus};

pub struct CreateBookingInput {
    pub chef_id: Uuid,
    pub date: String,
    pub time: Option<String>,
    pub guests: i32,
    pub event_type: Option<String>,
    pub meal_types: Vec<String>,
    pub location: Option<String>,
}

/// Any status may be set from any status; there is no transition table.
pub struct UpdateBookingStatusInput {
    pub booking_id: Uuid,
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
}
