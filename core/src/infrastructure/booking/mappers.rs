use sea_orm::ActiveValue::Set;
use tracing::error;

use crate::{
    domain::{
        booking::entities::{ChefBookingRequest, PaymentStatus},
        common::entities::app_errors::CoreError,
    },
    entity::bookings,
};

impl From<&bookings::Model> for ChefBookingRequest {
    fn from(model: &bookings::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            chef_id: model.chef_id,
            client_name: model.client_name.clone(),
            client_email: model.client_email.clone(),
            chef_name: model.chef_name.clone(),
            event_type: model.event_type.clone(),
            date: model.date.clone(),
            time: model.time.clone(),
            hours: model.hours,
            guests: model.guests,
            meal_types: serde_json::from_value(model.meal_types.clone()).unwrap_or_default(),
            location: model.location.clone(),
            total_payout: model.total_payout,
            commission: model.commission,
            status: model.status.as_str().into(),
            payment_status: model.payment_status.as_deref().map(PaymentStatus::from),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<bookings::Model> for ChefBookingRequest {
    fn from(model: bookings::Model) -> Self {
        Self::from(&model)
    }
}

impl TryFrom<&ChefBookingRequest> for bookings::ActiveModel {
    type Error = CoreError;

    fn try_from(booking: &ChefBookingRequest) -> Result<Self, Self::Error> {
        let meal_types = serde_json::to_value(&booking.meal_types).map_err(|e| {
            error!("Failed to serialize meal types: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            id: Set(booking.id),
            user_id: Set(booking.user_id),
            chef_id: Set(booking.chef_id),
            client_name: Set(booking.client_name.clone()),
            client_email: Set(booking.client_email.clone()),
            chef_name: Set(booking.chef_name.clone()),
            event_type: Set(booking.event_type.clone()),
            date: Set(booking.date.clone()),
            time: Set(booking.time.clone()),
            hours: Set(booking.hours),
            guests: Set(booking.guests),
            meal_types: Set(meal_types),
            location: Set(booking.location.clone()),
            total_payout: Set(booking.total_payout),
            commission: Set(booking.commission),
            status: Set(booking.status.as_str().to_string()),
            payment_status: Set(booking.payment_status.map(|p| p.as_str().to_string())),
            created_at: Set(booking.created_at.fixed_offset()),
        })
    }
}
